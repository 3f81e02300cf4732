use std::path::{Path, PathBuf};

use compio::fs;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::filesystem::LocalFilesystem;
use crate::outline::OutlineParser;
use crate::scaffold::{ScaffoldReport, Scaffolder, progress};

pub struct Application;

impl Application {
    pub async fn run(
        app_config: impl Into<RuntimeConfig>,
    ) -> Result<ScaffoldReport, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let outline = Self::read_outline(&app_config.input).await?;
        info!(
            "Parsing {} as a {} outline",
            app_config.input.display(),
            app_config.format
        );

        let events = OutlineParser::for_format(app_config.format).events(&outline);
        let report = Scaffolder::new(LocalFilesystem, &app_config.root)
            .build(events)
            .await;

        progress::print_summary(&report);
        Ok(report)
    }

    async fn read_outline(path: &Path) -> Result<String, ApplicationError> {
        debug!("Reading outline file {}", path.display());
        let bytes = fs::read(path)
            .await
            .context(InputReadSnafu { path })?;
        debug!("Read {} bytes of outline", bytes.len());
        String::from_utf8(bytes).context(InputEncodingSnafu { path })
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to open the outline file {}", path.display()))]
    InputReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Outline file {} is not valid UTF-8", path.display()))]
    InputEncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::OutlineFormat;

    fn config(input: PathBuf, format: OutlineFormat, root: PathBuf) -> RuntimeConfig {
        RuntimeConfig {
            input,
            format,
            root,
        }
    }

    #[compio::test]
    async fn missing_input_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let result = Application::run(config(
            temp.path().join("nope.md"),
            OutlineFormat::Tree,
            temp.path().to_path_buf(),
        ))
        .await;

        assert!(matches!(result, Err(ApplicationError::InputReadError { .. })));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[compio::test]
    async fn non_utf8_input_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("structure.md");
        std::fs::write(&input, [0xff, 0xfe, 0x00]).unwrap();

        let result = Application::run(config(
            input,
            OutlineFormat::Layered,
            temp.path().to_path_buf(),
        ))
        .await;

        assert!(matches!(
            result,
            Err(ApplicationError::InputEncodingError { .. })
        ));
    }

    #[compio::test]
    async fn builds_scaffold_from_layered_file() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("structure.md");
        std::fs::write(
            &input,
            "```\nservice\n- cmd\n  - main.go\n- internal\n  - store\n    - store.go\n- go.mod\n```\n",
        )
        .unwrap();
        let out = temp.path().join("out");

        let report = Application::run(config(input, OutlineFormat::Layered, out.clone()))
            .await
            .unwrap();

        let root = out.join("service");
        assert!(root.is_dir());
        assert!(root.join("cmd/main.go").is_file());
        assert!(root.join("internal/store/store.go").is_file());
        assert!(root.join("go.mod").is_file());
        assert_eq!(report.files, 3);
    }
}
