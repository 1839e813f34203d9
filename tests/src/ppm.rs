/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use tint_bin::cmd_parsers::global_options::CmdOptions;
use tint_bin::file_io::decode_image;
use tint_bin::Interpreter;
use tint_core::options::DecoderOptions;

use crate::temp_file;

const KOALA_P3: &[u8] = b"P3
# the koala sample
2 2
255
123 45 67   12 200 150
255 255 0   128 128 125
";

#[test]
fn decode_hand_written_p3() {
    let image = decode_image(KOALA_P3, DecoderOptions::default()).unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.pixel(0, 0), [123, 45, 67]);
    assert_eq!(image.pixel(1, 0), [12, 200, 150]);
    assert_eq!(image.pixel(0, 1), [255, 255, 0]);
    assert_eq!(image.pixel(1, 1), [128, 128, 125]);
}

#[test]
fn load_transform_save_reload() {
    let source = temp_file("source.ppm");
    let output = temp_file("flipped.ppm");

    fs::write(&source, KOALA_P3).unwrap();

    let script = format!(
        "load {} koala\nvertical-flip koala flipped\nsave {} flipped\nload {} again\n",
        source.display(),
        output.display(),
        output.display()
    );
    let mut interpreter = Interpreter::new(CmdOptions::new());
    let result = interpreter.run_script(script.as_bytes());

    let _ = fs::remove_file(&source);
    let _ = fs::remove_file(&output);

    result.unwrap();

    let again = interpreter.registry().get("again").unwrap();

    assert_eq!(again.pixel(0, 0), [255, 255, 0]);
    assert_eq!(again.pixel(1, 1), [12, 200, 150]);
}

#[test]
fn saving_other_formats_fails() {
    let mut interpreter = Interpreter::new(CmdOptions::new());
    interpreter.registry_mut().insert("koala", crate::koala());

    let path = temp_file("koala.png");

    assert!(interpreter
        .run_line(&format!("save {} koala", path.display()))
        .is_err());
    assert!(!path.exists());
}
