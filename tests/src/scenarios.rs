/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use tint_bin::cmd_parsers::global_options::CmdOptions;
use tint_bin::Interpreter;

use crate::{koala, sample_path, TestEntry};

fn run_entry(entry: &TestEntry) -> Result<(), String> {
    let mut interpreter = Interpreter::new(CmdOptions::new());
    interpreter.registry_mut().insert("koala", koala());

    let mut failed = false;

    for line in &entry.script {
        if interpreter.run_line(line).is_err() {
            failed = true;
            break;
        }
    }
    if failed != entry.fails {
        return Err(format!("expected failure: {}, got failure: {failed}", entry.fails));
    }

    for check in &entry.checks {
        let image = interpreter
            .registry()
            .get(&check.image)
            .map_err(|e| format!("{e:?}"))?;

        assert!(image.is_clamped());

        let found = image.pixel(check.x, check.y);

        if found != check.pixel {
            return Err(format!(
                "{} at ({}, {}): expected {:?} found {:?}",
                check.image, check.x, check.y, check.pixel, found
            ));
        }
    }
    Ok(())
}

#[test]
fn test_scenarios() {
    let file = sample_path().join("scenarios.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut errors = Vec::new();

    for entry in &entries {
        if let Err(reason) = run_entry(entry) {
            errors.push(format!("{}: {reason}", entry.name));
        }
    }
    if !errors.is_empty() {
        panic!("Failing scenarios\n{}", errors.join("\n"));
    }
}
