/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Laws every operation has to uphold on arbitrary input
use nanorand::Rng;
use tint_image::image::Image;
use tint_image::traits::OperationsTrait;
use tint_imageprocs::color_correct::ColorCorrect;
use tint_imageprocs::compress::Compress;
use tint_imageprocs::flip::{Flip, FlipDirection};
use tint_imageprocs::histogram::HistogramVisualization;
use tint_imageprocs::levels::LevelsAdjust;
use tint_imageprocs::mask::MaskableOperation;
use tint_imageprocs::split::{split_column, SplitView};

fn random_image(width: usize, height: usize) -> Image {
    let mut pixels = vec![0_u8; width * height * 3];
    nanorand::WyRand::new().fill(&mut pixels);

    Image::from_interleaved_u8(&pixels, width, height).unwrap()
}

fn all_operations() -> Vec<Box<dyn OperationsTrait>> {
    let mut operations: Vec<Box<dyn OperationsTrait>> = [
        MaskableOperation::Red,
        MaskableOperation::Green,
        MaskableOperation::Blue,
        MaskableOperation::Value,
        MaskableOperation::Intensity,
        MaskableOperation::Luma,
        MaskableOperation::Blur,
        MaskableOperation::Sharpen,
        MaskableOperation::Sepia,
        MaskableOperation::Greyscale,
        MaskableOperation::Brighten(90),
        MaskableOperation::Brighten(-90)
    ]
    .into_iter()
    .map(MaskableOperation::operation)
    .collect();

    operations.push(Box::new(Flip::new(FlipDirection::Horizontal)));
    operations.push(Box::new(Flip::new(FlipDirection::Vertical)));
    operations.push(Box::new(LevelsAdjust::new(20, 100, 230)));
    operations.push(Box::new(ColorCorrect::new()));
    operations.push(Box::new(Compress::new(60.0)));
    operations.push(Box::new(HistogramVisualization::new()));
    operations
}

#[test]
fn every_operation_clamps() {
    let image = random_image(19, 11);

    for operation in all_operations() {
        let output = operation.execute(&image).unwrap();
        assert!(output.is_clamped(), "{}", operation.name());
    }
}

#[test]
fn source_is_untouched() {
    let image = random_image(9, 7);
    let copy = image.clone();

    for operation in all_operations() {
        operation.execute(&image).unwrap();
    }
    assert_eq!(image, copy);
}

#[test]
fn flips_are_involutions() {
    let image = random_image(13, 6);

    for direction in [FlipDirection::Horizontal, FlipDirection::Vertical] {
        let flip = Flip::new(direction);
        let twice = flip.execute(&flip.execute(&image).unwrap()).unwrap();

        assert_eq!(twice, image);
    }
}

#[test]
fn split_keeps_the_right_side() {
    let image = random_image(17, 5);

    for operation in all_operations().iter().filter(|op| op.name() != "Histogram visualization") {
        let full = operation.execute(&image).unwrap();

        for percentage in [0.0, 33.3, 50.0, 100.0] {
            let column = split_column(image.width(), percentage);
            let split = SplitView::new(operation.as_ref(), percentage)
                .execute(&image)
                .unwrap();

            for y in 0..image.height() {
                for x in 0..image.width() {
                    let expected = if x < column { full.pixel(x, y) } else { image.pixel(x, y) };
                    assert_eq!(split.pixel(x, y), expected, "{} at {percentage}", operation.name());
                }
            }
        }
    }
}

#[test]
fn generated_samples_are_bytes() {
    for _ in 0..16 {
        assert!(random_image(31, 17).is_clamped());
    }
}

#[test]
fn full_compression_is_flat() {
    for (width, height) in [(8, 8), (5, 9), (13, 3)] {
        let image = random_image(width, height);
        let output = Compress::new(100.0).execute(&image).unwrap();
        let first = output.pixel(0, 0);

        for y in 0..height {
            for x in 0..width {
                assert_eq!(output.pixel(x, y), first);
            }
        }
    }
}
