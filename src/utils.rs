use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::{
    deriver::{decode_hex_strict, ClaimPair},
    error::AirdropError,
};

const SALT_PROMPT: &str = "input salt: ";
const STDIN_PATH: &str = "<stdin>";

/// Splits on `\n` and keeps empty entries, including the one after a trailing newline.
pub async fn read_file_lines(path: impl AsRef<Path>) -> Result<Vec<String>, AirdropError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AirdropError::file_access(path, e))?;

    Ok(contents.split('\n').map(str::to_owned).collect())
}

pub async fn load_target_addresses(
    path: impl AsRef<Path>,
    skip_blank_lines: bool,
) -> Result<Vec<String>, AirdropError> {
    let path = path.as_ref();
    let lines = read_file_lines(path).await?;
    tracing::debug!("Read {} lines from {}", lines.len(), path.display());

    let mut addresses = Vec::with_capacity(lines.len());
    for (idx, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            if skip_blank_lines {
                continue;
            }
            tracing::warn!("Blank address at {}:{}", path.display(), idx + 1);
        }
        addresses.push(line);
    }

    Ok(addresses)
}

pub fn parse_salt(input: &str) -> Result<Vec<u8>, AirdropError> {
    decode_hex_strict(input.trim()).map_err(|e| AirdropError::malformed_hex("salt", e))
}

pub async fn prompt_salt() -> Result<Vec<u8>, AirdropError> {
    let stdin_err = |e| AirdropError::file_access(STDIN_PATH, e);

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(SALT_PROMPT.as_bytes())
        .await
        .map_err(stdin_err)?;
    stdout.flush().await.map_err(stdin_err)?;

    let mut line = String::new();
    let read = BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .map_err(stdin_err)?;
    if read == 0 {
        return Err(stdin_err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no salt entered",
        )));
    }

    parse_salt(&line)
}

/// Overwrites `path` with `[[address, claim_id], ...]`.
pub async fn write_claim_pairs(
    path: impl AsRef<Path>,
    pairs: &[ClaimPair],
) -> Result<(), AirdropError> {
    let path = path.as_ref();
    let json = serde_json::to_vec(pairs)
        .map_err(|e| AirdropError::file_access(path, std::io::Error::from(e)))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| AirdropError::file_access(path, e))
}
