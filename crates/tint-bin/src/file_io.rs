/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing image files
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use tint_core::options::DecoderOptions;
use tint_image::image::Image;
use tint_ppm::{PPMDecoder, PPMEncoder, PPMVersions};

use crate::errors::CommandErrors;

/// Confirm `path` names a PPM file
fn check_extension(path: &Path) -> Result<(), CommandErrors> {
    match path.extension().and_then(|x| x.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("ppm") => Ok(()),
        _ => Err(CommandErrors::UnsupportedFormat(path.display().to_string()))
    }
}

/// Decode an image from PPM bytes
///
/// # Errors
/// Malformed or oversized input
pub fn decode_image(data: &[u8], options: DecoderOptions) -> Result<Image, CommandErrors> {
    let mut decoder = PPMDecoder::new_with_options(options, data);

    let pixels = decoder.decode()?;
    let (width, height) = decoder
        .dimensions()
        .ok_or(CommandErrors::PPMDecodeErrors(
            tint_ppm::PPMDecodeErrors::GenericStatic("Headers were not decoded")
        ))?;

    Ok(Image::from_interleaved_u8(&pixels, width, height)?)
}

/// Encode an image as PPM bytes
///
/// # Errors
/// Only if writing into memory fails
pub fn encode_image(image: &Image, version: PPMVersions) -> Result<Vec<u8>, CommandErrors> {
    let mut out = Vec::with_capacity(image.width() * image.height() * 3 + 20);

    PPMEncoder::new(&mut out).encode(
        image.width(),
        image.height(),
        version,
        &image.to_interleaved_u8()
    )?;
    Ok(out)
}

/// Read and decode a PPM file
///
/// # Errors
/// Wrong extension, unreadable file or malformed contents
pub fn load_image(path: &Path, options: DecoderOptions) -> Result<Image, CommandErrors> {
    check_extension(path)?;

    let data = std::fs::read(path)?;
    info!("Read {} bytes from {}", data.len(), path.display());

    decode_image(&data, options)
}

/// Encode an image and write it to `path`, replacing any existing file
///
/// # Errors
/// Wrong extension or I/O failures
pub fn save_image(path: &Path, image: &Image, version: PPMVersions) -> Result<(), CommandErrors> {
    check_extension(path)?;

    let encoded = encode_image(image, version)?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&encoded)?;
    writer.flush()?;

    debug!("Wrote {} as {version}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tint_core::options::DecoderOptions;
    use tint_image::image::Image;
    use tint_ppm::PPMVersions;

    use crate::errors::CommandErrors;
    use crate::file_io::{decode_image, encode_image, load_image, save_image};

    #[test]
    fn bytes_round_trip() {
        let image = Image::from_fn(5, 3, |x, y, pix| {
            pix[0] = (x * 50) as i32;
            pix[1] = (y * 100) as i32;
            pix[2] = 7;
        })
        .unwrap();

        for version in [PPMVersions::P3, PPMVersions::P6] {
            let bytes = encode_image(&image, version).unwrap();
            assert_eq!(decode_image(&bytes, DecoderOptions::default()).unwrap(), image);
        }
    }

    #[test]
    fn only_ppm_files() {
        let image = Image::fill([0, 0, 0], 1, 1).unwrap();

        assert!(matches!(
            save_image(Path::new("out.png"), &image, PPMVersions::P6),
            Err(CommandErrors::UnsupportedFormat(_))
        ));
        assert!(matches!(
            load_image(Path::new("in"), DecoderOptions::default()),
            Err(CommandErrors::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("tint-file-io-{}.PPM", std::process::id()));
        let image = Image::fill([10, 20, 30], 4, 2).unwrap();

        save_image(&path, &image, PPMVersions::P6).unwrap();
        let loaded = load_image(&path, DecoderOptions::default());
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.unwrap(), image);
    }
}
