//! Standalone helpers for the pieces of PDF structure the surface emits:
//! standard font resources, WinAnsi text encoding and image XObjects.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Object, Stream, dictionary};
use quire_render_core::ImageError;
use quire_style::{FontFamily, FontSpec, FontStyle};
use std::io::Write;

/// The standard Type1 fonts registered on every page, in resource-name order (`F1`..`F8`).
pub const STANDARD_FONTS: [(FontFamily, FontStyle); 8] = [
    (FontFamily::Helvetica, FontStyle::Normal),
    (FontFamily::Helvetica, FontStyle::Bold),
    (FontFamily::Helvetica, FontStyle::Italic),
    (FontFamily::Helvetica, FontStyle::BoldItalic),
    (FontFamily::Times, FontStyle::Normal),
    (FontFamily::Times, FontStyle::Bold),
    (FontFamily::Times, FontStyle::Italic),
    (FontFamily::Times, FontStyle::BoldItalic),
];

/// Resource name (`F1`..`F8`) under which `font`'s face is registered.
pub fn font_resource_name(font: &FontSpec) -> String {
    let index = STANDARD_FONTS
        .iter()
        .position(|(family, style)| *family == font.family && *style == font.style)
        .unwrap_or(0);
    format!("F{}", index + 1)
}

pub fn standard_font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for (i, (family, style)) in STANDARD_FONTS.iter().enumerate() {
        let base_font = FontSpec::new(*family, *style, 10.0).postscript_name();
        let single_font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(format!("F{}", i + 1).into_bytes(), Object::Dictionary(single_font_dict));
    }
    fonts
}

/// Encode text for a WinAnsi (CP1252) font. Unmappable characters become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => win_ansi_extra(c).unwrap_or(b'?'),
        })
        .collect()
}

fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        '\t' => b' ',
        _ => return None,
    };
    Some(byte)
}

/// A decoded raster, flattened onto white and ready to embed.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    /// Zlib-compressed 8-bit RGB samples.
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn to_xobject(&self) -> Object {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        Object::Stream(Stream::new(dict, self.data.clone()))
    }
}

/// Decode PNG/JPEG/GIF bytes and compress them as a DeviceRGB image stream.
pub fn encode_image_xobject(src: &str, bytes: &[u8]) -> Result<EncodedImage, ImageError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ImageError::Decode {
        src: src.to_string(),
        message: e.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty(src.to_string()));
    }

    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        for channel in [r, g, b] {
            rgb.push(blend_on_white(channel, a));
        }
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&rgb)
        .and_then(|_| encoder.flush())
        .map_err(|e| ImageError::Decode {
            src: src.to_string(),
            message: e.to_string(),
        })?;
    let data = encoder.finish().map_err(|e| ImageError::Decode {
        src: src.to_string(),
        message: e.to_string(),
    })?;

    Ok(EncodedImage { width, height, data })
}

fn blend_on_white(channel: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + 255 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_win_ansi_maps_cp1252_specials() {
        assert_eq!(to_win_ansi("€5"), vec![0x80, b'5']);
        assert_eq!(to_win_ansi("£"), vec![0xA3]);
        assert_eq!(to_win_ansi("“ok”"), vec![0x93, b'o', b'k', 0x94]);
        assert_eq!(to_win_ansi("日"), vec![b'?']);
    }

    #[test]
    fn test_font_resource_names() {
        let times_bold = FontSpec::new(FontFamily::Times, FontStyle::Bold, 11.0);
        assert_eq!(font_resource_name(&times_bold), "F6");
        assert_eq!(font_resource_name(&FontSpec::default()), "F1");
        assert_eq!(standard_font_dictionary().len(), 8);
    }

    #[test]
    fn test_encode_png() {
        let encoded = encode_image_xobject("red.png", &png(3, 2, [255, 0, 0, 255])).unwrap();
        assert_eq!((encoded.width, encoded.height), (3, 2));

        let mut raw = Vec::new();
        let mut decoder = flate2::read::ZlibDecoder::new(&encoded.data[..]);
        std::io::Read::read_to_end(&mut decoder, &mut raw).unwrap();
        assert_eq!(raw.len(), 3 * 2 * 3);
        assert_eq!(&raw[..3], &[255, 0, 0]);
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        assert_eq!(blend_on_white(0, 0), 255);
        assert_eq!(blend_on_white(10, 255), 10);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = encode_image_xobject("bad.png", b"not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
