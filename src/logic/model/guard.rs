//! Model Guard - Artifact Integrity
//!
//! The training pipeline writes a `.sha256` sidecar next to the artifact.
//! Verifying it lets the operator distinguish "model file corrupt" from
//! "model file absent" before trusting any prediction.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::inference::ModelError;
use crate::constants;

/// SHA-256 of a file, lowercase hex.
pub fn compute_sha256(path: &Path) -> Result<String, ModelError> {
    let bytes = fs::read(path)
        .map_err(|e| ModelError(format!("Cannot read {}: {}", path.display(), e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Compare an artifact against its checksum sidecar.
///
/// The sidecar holds the hex digest as its first whitespace-separated token
/// (the `sha256sum` output format).
pub fn verify_checksum_at(model: &Path, sidecar: &Path) -> Result<bool, ModelError> {
    let expected = fs::read_to_string(sidecar)
        .map_err(|e| ModelError(format!("Cannot read {}: {}", sidecar.display(), e)))?;
    let expected = expected
        .split_whitespace()
        .next()
        .ok_or_else(|| ModelError(format!("Empty checksum file: {}", sidecar.display())))?
        .to_string();

    let actual = compute_sha256(model)?;
    Ok(actual.eq_ignore_ascii_case(&expected))
}

/// Verify the configured artifact against its sidecar.
pub fn verify_checksum() -> Result<bool, ModelError> {
    verify_checksum_at(
        Path::new(&constants::model_path()),
        Path::new(&constants::checksum_path()),
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_artifact(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_matching_checksum_verifies() {
        let dir = tempfile::tempdir().unwrap();
        let model = write_artifact(&dir, "model.onnx", b"fake model bytes");
        let digest = compute_sha256(&model).unwrap();
        let sidecar = write_artifact(
            &dir,
            "model.onnx.sha256",
            format!("{}  model.onnx\n", digest).as_bytes(),
        );

        assert!(verify_checksum_at(&model, &sidecar).unwrap());
    }

    #[test]
    fn test_tampered_artifact_fails_verification() {
        let dir = tempfile::tempdir().unwrap();
        let model = write_artifact(&dir, "model.onnx", b"fake model bytes");
        let digest = compute_sha256(&model).unwrap();
        let sidecar = write_artifact(&dir, "model.onnx.sha256", digest.as_bytes());

        // Corrupt the artifact after the sidecar was written
        write_artifact(&dir, "model.onnx", b"tampered bytes");

        assert!(!verify_checksum_at(&model, &sidecar).unwrap());
    }

    #[test]
    fn test_missing_sidecar_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let model = write_artifact(&dir, "model.onnx", b"fake model bytes");
        let sidecar = dir.path().join("missing.sha256");

        assert!(verify_checksum_at(&model, &sidecar).is_err());
    }
}
