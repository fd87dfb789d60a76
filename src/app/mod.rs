use crate::api::JokeClient;
use crate::cli::Cli;
use crate::config::ConfigStore;
use crate::error::{JokeError, Result};
use crate::prompt::build_prompt;
use std::ffi::OsString;
use std::io::{BufRead, Write};


/// Runs one joke request: credential, flags, prompt, remote call, output.
pub struct App<R, W> {
    store: ConfigStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(store: ConfigStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// `connect` builds the remote client from the credential; it is not
    /// called when help is requested or anything before it fails.
    pub fn run<I, T, F, C>(&mut self, args: I, connect: F) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: FnOnce(&str) -> Result<C>,
        C: JokeClient,
    {
        let api_key = self.credential()?;

        let cli = Cli::try_parse_args(args)?;
        if cli.help {
            write!(self.output, "{}", Cli::usage())?;
            self.output.flush()?;
            return Ok(());
        }

        let prompt = build_prompt(cli.categories().as_slice());
        tracing::debug!(prompt = %prompt, "Built prompt");

        let client = connect(&api_key)?;

        let runtime = tokio::runtime::Runtime::new()?;
        let joke = runtime.block_on(client.tell(&prompt))?;

        writeln!(self.output, "{}", joke)?;
        self.output.flush()?;
        Ok(())
    }

    /// Configured API key, or one read from the user and saved.
    fn credential(&mut self) -> Result<String> {
        match self.store.load_credential() {
            Ok(key) if !key.is_empty() => {
                tracing::debug!("Using API key from config file");
                return Ok(key);
            }
            Ok(_) => tracing::debug!("Configured API key is empty"),
            Err(e) => tracing::debug!(error = %e, "No usable config"),
        }

        let api_key = self.prompt_for_key()?;
        self.store.save_credential(&api_key)?;
        tracing::debug!(path = %self.store.path().display(), "API key saved");
        writeln!(self.output, "API key saved successfully.")?;
        Ok(api_key)
    }

    fn prompt_for_key(&mut self) -> Result<String> {
        writeln!(
            self.output,
            "DeepSeek API key not found. Please enter your API key:"
        )?;
        self.output.flush()?;

        let mut input = String::new();
        self.input.read_line(&mut input)?;

        let api_key = input.trim();
        if api_key.is_empty() {
            return Err(JokeError::EmptyCredential);
        }
        Ok(api_key.to_string())
    }
}
