use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use patch::{patch, Operation, PatchFailure};
use serde::de::DeserializeOwned;
use value::Value;

use crate::config::PatchConfig;

const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Patch(#[from] PatchFailure),
}

pub(crate) fn run(config: &PatchConfig) -> Result<(), CommandError> {
    let mut document: Value = read_json(&config.document)?;
    let operations: Vec<Operation> = read_json(&config.patch)?;

    let res = patch(&mut document, &operations);
    match &res {
        Ok(()) => tracing::info!(operations = operations.len(), "document patched"),
        Err(err) => tracing::info!(step = err.step, error = %err.source, "patch failed"),
    }

    if res.is_ok() || config.partial {
        write_document(io::stdout().lock(), &document, config.pretty)?;
    }
    Ok(res?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let data = if path == Path::new(STDIN_PATH) {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data).map(|_| data)
    } else {
        std::fs::read(path)
    }
    .map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&data).map_err(|source| CommandError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(mut writer: impl Write, document: &Value, pretty: bool) -> Result<(), CommandError> {
    let data = if pretty {
        serde_json::to_vec_pretty(document)
    } else {
        serde_json::to_vec(document)
    }
    .map_err(CommandError::Encode)?;

    writer.write_all(&data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use value::value;

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "patchstructure-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_operations() {
        let path = temp_file(
            "operations.json",
            r#"[{ "op": "add", "path": "/a", "value": 1 }, { "op": "remove", "path": "/b" }]"#,
        );
        let operations: Vec<Operation> = read_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            operations,
            vec![Operation::add("/a", 1i64), Operation::remove("/b")]
        );
    }

    #[test]
    fn read_unsupported_operation() {
        let path = temp_file("unsupported.json", r#"[{ "op": "merge", "path": "/a" }]"#);
        let err = read_json::<Vec<Operation>>(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, CommandError::Decode { .. }));
        assert!(err.to_string().contains("unsupported operation: `merge`"));
    }

    #[test]
    fn read_missing_file() {
        let err = read_json::<Value>(Path::new("/nonexistent/patchstructure.json")).unwrap_err();
        assert!(matches!(err, CommandError::Read { .. }));
    }

    #[test]
    fn write_compact_and_pretty() {
        let document = value!({ "a": [1, 2] });

        let mut out = Vec::new();
        write_document(&mut out, &document, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"a\":[1,2]}\n");

        let mut out = Vec::new();
        write_document(&mut out, &document, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n"
        );
    }
}
