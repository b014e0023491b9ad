//
// devices.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::path::Path;

use assert_matches::assert_matches;
use grdevices::dispatch;
use grdevices::DeviceManager;
use grdevices::Error;
use rcall::CallFrame;
use rcall::RValue;

fn postscript_frame(file: &Path, family: RValue) -> CallFrame {
    CallFrame::new("postscript", vec![
        RValue::from(file.display().to_string()),
        RValue::from("letter"),
        family,
        RValue::from("white"),
        RValue::from("black"),
        RValue::from(7.0),
        RValue::from(7.0),
        RValue::Null, // horizontal unset
        RValue::from(12.0),
        RValue::from(true),
        RValue::from(true),
        RValue::from(false),
        RValue::from(""),
    ])
}

fn pictex_frame(file: &Path) -> CallFrame {
    CallFrame::new("pictex", vec![
        RValue::from(file.display().to_string()),
        RValue::from("white"),
        RValue::from("black"),
        RValue::from(6.0),
        RValue::from(4.0),
        RValue::Null, // debug unset
    ])
}

fn xfig_frame(file: &Path) -> CallFrame {
    CallFrame::new("xfig", vec![
        RValue::from(file.display().to_string()),
        RValue::from("letter"),
        RValue::from("Times"),
        RValue::from("white"),
        RValue::from("black"),
        RValue::from(7.0),
        RValue::from(7.0),
        RValue::from("sideways?"), // unrecognized orientation flag
        RValue::from(12.0),
        RValue::from(true),
        RValue::from(true),
    ])
}

#[test]
fn test_postscript_construction_registers_device() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.ps");
    let mut manager = DeviceManager::new();

    let mut frame = postscript_frame(&file, RValue::from("Helvetica"));
    dispatch::postscript(&mut manager, &mut frame).unwrap();

    assert_eq!(manager.device_count(), 1);
    assert_eq!(manager.active_device(), Some("postscript"));
    assert!(file.exists());

    let device = &manager.devices()[0];
    assert_eq!(device.name(), "postscript");
    assert!(device.display_list().is_recording());
    assert!(device.display_list().is_empty());

    // Orientation was unset, so the device came up in landscape
    assert!(device.par().landscape);
    assert_eq!(device.par().pointsize, 12.0);
}

#[test]
fn test_postscript_accepts_four_afm_paths() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.ps");
    let mut manager = DeviceManager::new();

    let family = RValue::from(vec!["a.afm", "b.afm", "c.afm", "d.afm"]);
    let mut frame = postscript_frame(&file, family);
    dispatch::postscript(&mut manager, &mut frame).unwrap();

    assert_eq!(manager.device_count(), 1);
    assert_eq!(manager.active_device(), Some("postscript"));
}

#[test]
fn test_postscript_rejects_two_element_family() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.ps");
    let mut manager = DeviceManager::new();

    let family = RValue::from(vec!["a.afm", "b.afm"]);
    let mut frame = postscript_frame(&file, family);

    assert_matches!(
        dispatch::postscript(&mut manager, &mut frame),
        Err(Error::InvalidFamilyParameter { call }) => {
            assert_eq!(call, "postscript");
        }
    );

    // No partial registration, and construction never started
    assert_eq!(manager.device_count(), 0);
    assert_eq!(manager.active_device(), None);
    assert!(!file.exists());
}

#[test]
fn test_failed_driver_leaves_state_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = DeviceManager::new();

    let mut frame = pictex_frame(&dir.path().join("out.tex"));
    dispatch::pictex(&mut manager, &mut frame).unwrap();
    assert_eq!(manager.active_device(), Some("pictex"));

    // Unwritable output path: the driver constructor fails
    let missing = dir.path().join("no-such-dir").join("out.ps");
    let mut frame = postscript_frame(&missing, RValue::from("Helvetica"));

    assert_matches!(
        dispatch::postscript(&mut manager, &mut frame),
        Err(Error::UnableToStartDevice {
            name: "postscript",
            ..
        })
    );

    assert_eq!(manager.device_count(), 1);
    assert_eq!(manager.active_device(), Some("pictex"));
}

#[test]
fn test_pictex_construction_registers_device() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.tex");
    let mut manager = DeviceManager::new();

    let mut frame = pictex_frame(&file);
    dispatch::pictex(&mut manager, &mut frame).unwrap();

    assert_eq!(manager.device_count(), 1);
    assert_eq!(manager.active_device(), Some("pictex"));
    assert!(file.exists());
    assert_eq!(manager.devices()[0].par().width, 6.0);
}

#[test]
fn test_xfig_construction_defaults_to_landscape() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.fig");
    let mut manager = DeviceManager::new();

    let mut frame = xfig_frame(&file);
    dispatch::xfig(&mut manager, &mut frame).unwrap();

    assert_eq!(manager.active_device(), Some("xfig"));
    assert!(manager.devices()[0].par().landscape);
}

#[test]
fn test_macintosh_rejects_zero_width() {
    let mut manager = DeviceManager::new();

    let mut frame = CallFrame::new("macintosh", vec![
        RValue::from(""),
        RValue::from(0.0),
        RValue::from(7.0),
        RValue::from(12.0),
    ]);

    assert_matches!(
        dispatch::macintosh(&mut manager, &mut frame),
        Err(Error::InvalidWidthOrHeight { call }) => {
            assert_eq!(call, "macintosh");
        }
    );

    assert_eq!(manager.device_count(), 0);
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_macintosh_is_unavailable_off_platform() {
    let mut manager = DeviceManager::new();

    let mut frame = CallFrame::new("macintosh", vec![
        RValue::from(""),
        RValue::from(7.0),
        RValue::from(7.0),
        RValue::from(12.0),
    ]);

    assert_matches!(
        dispatch::macintosh(&mut manager, &mut frame),
        Err(Error::DeviceUnavailable { name: "Macintosh" })
    );

    assert_eq!(manager.device_count(), 0);
    assert_eq!(manager.active_device(), None);
}

#[test]
fn test_device_table_capacity_is_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = DeviceManager::with_capacity(1);

    let mut frame = pictex_frame(&dir.path().join("first.tex"));
    dispatch::pictex(&mut manager, &mut frame).unwrap();

    let second = dir.path().join("second.tex");
    let mut frame = pictex_frame(&second);

    assert_matches!(
        dispatch::pictex(&mut manager, &mut frame),
        Err(Error::TooManyDevices { max: 1 })
    );

    // The precondition fired before construction: no output file
    assert!(!second.exists());
    assert_eq!(manager.device_count(), 1);
}

#[test]
fn test_each_success_overwrites_the_active_marker() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = DeviceManager::new();

    let mut frame = postscript_frame(&dir.path().join("out.ps"), RValue::from("Helvetica"));
    dispatch::postscript(&mut manager, &mut frame).unwrap();
    assert_eq!(manager.active_device(), Some("postscript"));

    let mut frame = xfig_frame(&dir.path().join("out.fig"));
    dispatch::xfig(&mut manager, &mut frame).unwrap();
    assert_eq!(manager.active_device(), Some("xfig"));

    let mut frame = pictex_frame(&dir.path().join("out.tex"));
    dispatch::pictex(&mut manager, &mut frame).unwrap();
    assert_eq!(manager.active_device(), Some("pictex"));

    assert_eq!(manager.device_count(), 3);
}
