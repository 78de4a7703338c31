//! User interaction and prompts for configuration setup
//!
//! Handles input collection for configuration initialization when the config
//! file does not exist yet.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for their RapidAPI key and returns the trimmed input.
///
/// Displayed on first run when no config file exists and no key is supplied
/// via the environment.
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    println!("Please enter your api-basketball API key: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
