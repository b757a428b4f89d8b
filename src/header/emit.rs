//! # Image Header Emitter
//!
//! Renders one image as a C header with an RGB565 pixel array.
//!
//! ## Layout
//!
//! ```text
//! /*
//!  * Menu_sm.h - menu status map image data
//!  * Pixel data definitions for the menu status map image
//!  * Menu resources - status map resource
//!  */
//!
//! #ifndef _SM_H_
//! #define _SM_H_
//!
//! const uint16_t SM_WIDTH = 2;
//! const uint16_t SM_HEIGHT = 1;
//!
//! const uint16_t SM_PIC[2] PROGMEM = {
//!     0xF800, 0x001F
//! };
//!
//! #endif // _SM_H_
//! ```
//!
//! Values are written [`VALUES_PER_LINE`] to a line, indented four spaces and
//! separated by `", "`. The last value has no trailing comma.

use std::fmt;

use image::RgbImage;

use super::describe::{Description, describe};
use crate::color::rgb565;
use crate::naming::SymbolFamily;

/// Number of packed colors written on each array line.
pub const VALUES_PER_LINE: usize = 16;

/// Inputs for the comment block at the top of a header.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentContext<'a> {
    /// Name of the header file being written, e.g. `Menu_sm.h`
    pub file_name: &'a str,
    /// Optional description tag such as `main-menu`
    pub tag: Option<&'a str>,
}

/// A rendered image header. Use `to_string()` for the file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
    file_name: String,
    description: Description,
    family: SymbolFamily,
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

impl HeaderDocument {
    pub fn family(&self) -> &SymbolFamily {
        &self.family
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Array length written in the declaration.
    pub fn declared_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of values written in the array body.
    pub fn element_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }
}

/// Build the header document for `image`.
pub fn emit(
    image: &RgbImage,
    family: &SymbolFamily,
    context: &CommentContext<'_>,
) -> HeaderDocument {
    let pixels = rgb565::pack_pixels(image);
    debug_assert_eq!(
        pixels.len(),
        image.width() as usize * image.height() as usize,
        "Packed pixel count must match image dimensions"
    );

    HeaderDocument {
        file_name: context.file_name.to_string(),
        description: describe(&family.stem, context.tag),
        family: family.clone(),
        width: image.width(),
        height: image.height(),
        pixels,
    }
}

impl fmt::Display for HeaderDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = &self.family;
        let guard = family.guard();

        // ===== Comment block =====
        writeln!(f, "/*")?;
        writeln!(
            f,
            " * {} - {} image data",
            self.file_name, self.description.title
        )?;
        writeln!(
            f,
            " * Pixel data definitions for the {} image",
            self.description.title
        )?;
        writeln!(f, " * Menu resources - {}", self.description.role)?;
        writeln!(f, " */")?;
        writeln!(f)?;

        // ===== Guard and dimensions =====
        writeln!(f, "#ifndef {}", guard)?;
        writeln!(f, "#define {}", guard)?;
        writeln!(f)?;
        writeln!(f, "const uint16_t {} = {};", family.width(), self.width)?;
        writeln!(f, "const uint16_t {} = {};", family.height(), self.height)?;
        writeln!(f)?;

        // ===== Pixel array =====
        writeln!(
            f,
            "const uint16_t {}[{}] PROGMEM = {{",
            family.pic(),
            self.declared_len()
        )?;
        let last = self.pixels.len().saturating_sub(1);
        for (i, color) in self.pixels.iter().enumerate() {
            if i % VALUES_PER_LINE == 0 {
                write!(f, "    ")?;
            }
            write!(f, "0x{:04X}", color)?;
            if i < last {
                write!(f, ", ")?;
            }
            if i % VALUES_PER_LINE == VALUES_PER_LINE - 1 || i == last {
                writeln!(f)?;
            }
        }
        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(f, "#endif // {}", guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse::parse_array;
    use crate::naming::derive;
    use image::Rgb;
    use pretty_assertions::assert_eq;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 13 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8])
        })
    }

    #[test]
    fn test_emit_golden_small() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));
        let family = derive("Menu_sm.png", Some("Menu_")).unwrap();
        let ctx = CommentContext {
            file_name: "Menu_sm.h",
            tag: None,
        };

        let expected = "\
/*
 * Menu_sm.h - menu status map image data
 * Pixel data definitions for the menu status map image
 * Menu resources - status map resource
 */

#ifndef _SM_H_
#define _SM_H_

const uint16_t SM_WIDTH = 2;
const uint16_t SM_HEIGHT = 1;

const uint16_t SM_PIC[2] PROGMEM = {
    0xF800, 0x001F
};

#endif // _SM_H_
";
        assert_eq!(emit(&img, &family, &ctx).to_string(), expected);
    }

    #[test]
    fn test_emit_line_wrapping() {
        let img = RgbImage::from_pixel(17, 2, Rgb([255, 255, 255]));
        let family = derive("wide.png", None).unwrap();
        let text = emit(&img, &family, &CommentContext::default()).to_string();

        let body: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.contains("PROGMEM"))
            .skip(1)
            .take_while(|l| *l != "};")
            .collect();

        // 34 values: 16 + 16 + 2
        assert_eq!(body.len(), 3);
        assert_eq!(body[0].matches("0xFFFF").count(), 16);
        assert!(body[0].ends_with("0xFFFF, "));
        assert!(body[1].ends_with("0xFFFF, "));
        assert_eq!(body[2], "    0xFFFF, 0xFFFF");
    }

    #[test]
    fn test_emit_exact_multiple_of_line_width() {
        let img = RgbImage::from_pixel(16, 1, Rgb([0, 0, 0]));
        let family = derive("row.png", None).unwrap();
        let text = emit(&img, &family, &CommentContext::default()).to_string();

        assert!(text.contains("0x0000, 0x0000\n};\n"));
        assert!(!text.contains(", \n};"));
    }

    #[test]
    fn test_declared_len_matches_element_count() {
        for (w, h) in [(1, 1), (3, 5), (16, 16), (33, 7)] {
            let img = gradient(w, h);
            let family = derive("grad.png", None).unwrap();
            let doc = emit(&img, &family, &CommentContext::default());

            assert_eq!(doc.declared_len(), (w * h) as usize);
            assert_eq!(doc.element_count(), doc.declared_len());

            let parsed = parse_array(&doc.to_string()).unwrap();
            assert_eq!(parsed.declared_len, doc.declared_len());
            assert_eq!(parsed.values, rgb565::pack_pixels(&img));
        }
    }

    #[test]
    fn test_emit_context_tag() {
        let img = RgbImage::new(1, 1);
        let family = derive("background.png", None).unwrap();
        let ctx = CommentContext {
            file_name: "Menu_background.h",
            tag: Some("main-menu"),
        };
        let text = emit(&img, &family, &ctx).to_string();
        assert!(text.contains(" * Menu_background.h - main menu screen image data\n"));
    }

    #[test]
    fn test_emit_ends_with_guard() {
        let img = RgbImage::new(1, 1);
        let family = derive("dot.png", None).unwrap();
        let text = emit(&img, &family, &CommentContext::default()).to_string();
        assert!(text.ends_with("#endif // _DOT_H_\n"));
        assert!(text.contains("#ifndef _DOT_H_\n#define _DOT_H_\n"));
    }
}
