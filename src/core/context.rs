use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::cli::CliOptions;
use crate::core::types::{DataType, SortingType};
use crate::errors::Result;
use crate::logging::Logger;

/// Everything one run needs, with command-line options resolved against
/// the configured defaults.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub data_type: DataType,
    pub sorting_type: SortingType,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub ignored_args: Vec<String>,
}

impl AppContext {
    pub fn new(options: CliOptions) -> Result<Self> {
        let config = match &options.config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load_default()?,
        };
        Ok(Self::with_config(options, config))
    }

    pub fn with_config(options: CliOptions, config: Config) -> Self {
        let logger = Logger::new();
        logger.set_log_dir(config.logs_dir());
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Self {
            data_type: options.data_type.unwrap_or(config.default_data_type()),
            sorting_type: options
                .sorting_type
                .unwrap_or(config.default_sorting_type()),
            input_file: options.input_file,
            output_file: options.output_file,
            ignored_args: options.ignored,
            config,
            logger,
        }
    }

    /// The input file when one was given, standard input otherwise.
    pub fn open_source(&self) -> Result<Box<dyn BufRead>> {
        match &self.input_file {
            Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}
