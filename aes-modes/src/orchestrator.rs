//! Runs one plaintext file through ECB, CBC and CFB

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::{ChainingMode, CipherConfig, Iv, Key128, ResolvedConfig};
use crate::error::Result;
use crate::stream::StreamingEncryptor;

/// Output path for `mode`: `<prefix>-<mode>` plus the input's extension.
///
/// `data` + CBC + `photo.jpg` gives `data-cbc.jpg`.
pub fn artifact_path(prefix: &Path, mode: ChainingMode, input: &Path) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push("-");
    name.push(mode.name());
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    PathBuf::from(name)
}

/// One mode run: a resolved configuration plus its input and output.
#[derive(Debug, Clone)]
pub struct EncryptionJob {
    config: ResolvedConfig,
    input: PathBuf,
    output: PathBuf,
}

impl EncryptionJob {
    pub fn new(config: ResolvedConfig, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            config,
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn mode(&self) -> ChainingMode {
        self.config.mode()
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn run(&self, encryptor: &StreamingEncryptor) -> Result<ModeArtifact> {
        debug!("{}: starting job", self.mode());
        let plaintext_len = encryptor.encrypt_file(&self.config, &self.input, &self.output)?;
        info!(
            "{}: encrypted {plaintext_len} bytes into {}",
            self.mode(),
            self.output.display()
        );
        Ok(ModeArtifact {
            mode: self.mode(),
            path: self.output.clone(),
            plaintext_len,
        })
    }
}

/// A finished mode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeArtifact {
    pub mode: ChainingMode,
    pub path: PathBuf,
    pub plaintext_len: u64,
}

/// Result of [`ModeOrchestrator::run_all`].
#[derive(Debug, Clone)]
pub struct RunReport {
    /// In ECB, CBC, CFB order.
    pub artifacts: Vec<ModeArtifact>,
    /// The IV CBC and CFB used, when none was supplied.
    pub generated_iv: Option<Iv>,
}

impl RunReport {
    pub fn path_for(&self, mode: ChainingMode) -> Option<&Path> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.mode == mode)
            .map(|artifact| artifact.path.as_path())
    }

    pub fn outputs(&self) -> BTreeMap<ChainingMode, PathBuf> {
        self.artifacts
            .iter()
            .map(|artifact| (artifact.mode, artifact.path.clone()))
            .collect()
    }
}

/// Encrypts one input under every [`ChainingMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeOrchestrator {
    encryptor: StreamingEncryptor,
    parallel: bool,
}

impl ModeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encryptor(mut self, encryptor: StreamingEncryptor) -> Self {
        self.encryptor = encryptor;
        self
    }

    /// Run the three jobs on the rayon pool. Output is identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resolve every job without touching the filesystem.
    ///
    /// CBC draws the IV when none is supplied; CFB is then built with that
    /// same IV so both modes share one instance.
    pub fn plan(
        &self,
        key: &[u8],
        iv: Option<&[u8]>,
        input: &Path,
        output_prefix: &Path,
    ) -> Result<(Vec<EncryptionJob>, Option<Iv>)> {
        let ecb = CipherConfig::build(ChainingMode::Ecb, key, iv)?;
        let cbc = CipherConfig::build(ChainingMode::Cbc, key, iv)?;
        let shared_iv = cbc.iv().map(|iv| *iv.as_bytes());
        let cfb = CipherConfig::build(ChainingMode::Cfb, key, shared_iv.as_ref().map(|iv| &iv[..]))?;
        let generated_iv = cbc.generated_iv().copied();

        let jobs = [ecb, cbc, cfb]
            .into_iter()
            .map(|config| {
                let output = artifact_path(output_prefix, config.mode(), input);
                EncryptionJob::new(config, input, output)
            })
            .collect();

        Ok((jobs, generated_iv))
    }

    /// Encrypt `input` under ECB, CBC and CFB.
    ///
    /// All configuration is validated before any file is opened. The first
    /// failing job aborts the run; artifacts already written are left in
    /// place.
    pub fn run_all(
        &self,
        key: &[u8],
        iv: Option<&[u8]>,
        input: &Path,
        output_prefix: &Path,
    ) -> Result<RunReport> {
        let (jobs, generated_iv) = self.plan(key, iv, input, output_prefix)?;
        if let Some(iv) = &generated_iv {
            warn!("no IV supplied, CBC and CFB use generated IV {iv}");
        }

        let artifacts = if self.parallel {
            jobs.par_iter()
                .map(|job| job.run(&self.encryptor))
                .collect::<Result<Vec<_>>>()?
        } else {
            jobs.iter()
                .map(|job| job.run(&self.encryptor))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(RunReport {
            artifacts,
            generated_iv,
        })
    }

    /// [`run_all`](Self::run_all) with the key and optional IV given as hex.
    pub fn run_all_hex(
        &self,
        key_hex: &str,
        iv_hex: Option<&str>,
        input: &Path,
        output_prefix: &Path,
    ) -> Result<RunReport> {
        let key = Key128::from_hex(key_hex)?;
        let iv = iv_hex.map(Iv::from_hex).transpose()?;
        self.run_all(
            key.as_bytes(),
            iv.as_ref().map(|iv| &iv.as_bytes()[..]),
            input,
            output_prefix,
        )
    }
}
