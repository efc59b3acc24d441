// ABOUTME: JSON input/output helpers for ahara-cli
// ABOUTME: Reads from a file or stdin and writes pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use ahara::errors::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read JSON from a file, or stdin when no path (or `-`) is given
pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> anyhow::Result<T> {
    let contents = match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_resource_id(path.display().to_string())
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(AppError::from)?;
            buffer
        }
    };
    let value = serde_json::from_str(&contents)
        .map_err(|e| AppError::invalid_input(format!("Invalid JSON input: {e}")).with_source(e))?;
    Ok(value)
}

/// Write a value to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(AppError::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
