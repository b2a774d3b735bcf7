// ABOUTME: Main application orchestration for the vellum CLI
// ABOUTME: Wires logging, data loading, document resolution, and rendering together

use std::io;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::Args;
use crate::data::{self, MetaData, Values};
use crate::loader;
use crate::render::{self, Separator};

pub struct App {
    args: Args,
}

impl App {
    /// Create a new application instance
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Initialize logging; diagnostics go to stderr so rendered output on
    /// stdout stays clean.
    fn init_logging(&self) {
        let log_level = if self.args.verbose { "debug" } else { "info" };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    /// Run one render pass: build the shared context, resolve the requested
    /// documents, and render them in order to stdout.
    pub fn run(self) -> Result<()> {
        self.init_logging();
        debug!("Starting vellum v{}", env!("CARGO_PKG_VERSION"));

        let env = data::environment();

        let values = match &self.args.data {
            Some(path) => data::load_values_file(path)?,
            None => Values::new(),
        };
        let values = nest_values(self.args.root.as_deref(), values);

        let meta = MetaData::new(env!("CARGO_PKG_NAME"), env, values);

        let separator = self
            .args
            .separator
            .as_deref()
            .map(Separator::new)
            .transpose()?;

        let docs = loader::resolve(&self.args.files, self.args.silent)?;
        info!("Rendering {} document(s)", docs.len());

        let stdout = io::stdout();
        let mut out = stdout.lock();
        render::render_documents(&meta, &docs, separator.as_ref(), &mut out)?;

        Ok(())
    }
}

fn nest_values(root: Option<&str>, values: Values) -> Values {
    match root {
        Some(path) => data::nest_under(path, values),
        None => values,
    }
}
