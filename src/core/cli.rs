use std::path::PathBuf;

use crate::core::types::{DataType, SortingType};
use crate::errors::{Error, Result, require_parse};

pub const OPTION_DATA_TYPE: &str = "-dataType";
pub const OPTION_SORTING_TYPE: &str = "-sortingType";
pub const OPTION_INPUT_FILE: &str = "-inputFile";
pub const OPTION_OUTPUT_FILE: &str = "-outputFile";
pub const OPTION_CONFIG: &str = "-config";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// `None` means "use the configured default".
    pub sorting_type: Option<SortingType>,
    pub data_type: Option<DataType>,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    /// Arguments no option claimed, in command-line order.
    pub ignored: Vec<String>,
}

impl CliOptions {
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args)
    }

    /// Each option is looked up by its first occurrence and consumes the
    /// position after it. Enum options are checked before path options.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut used = vec![false; args.len()];

        let sorting_type = Self::option(args, &mut used, OPTION_SORTING_TYPE)
            .map(|value| value.ok_or(Error::InvalidSortingType))
            .transpose()?
            .map(SortingType::try_from)
            .transpose()?;

        let data_type = Self::option(args, &mut used, OPTION_DATA_TYPE)
            .map(|value| value.ok_or(Error::InvalidDataType))
            .transpose()?
            .map(DataType::try_from)
            .transpose()?;

        let input_file = Self::path_option(args, &mut used, OPTION_INPUT_FILE)?;
        let output_file = Self::path_option(args, &mut used, OPTION_OUTPUT_FILE)?;
        let config_path = Self::path_option(args, &mut used, OPTION_CONFIG)?;

        let ignored = args
            .iter()
            .zip(&used)
            .filter(|(_, used)| !**used)
            .map(|(arg, _)| arg.clone())
            .collect();

        Ok(Self {
            sorting_type,
            data_type,
            input_file,
            output_file,
            config_path,
            ignored,
        })
    }

    /// `None` when the flag is absent, `Some(None)` when it has no value.
    fn option<'a>(args: &'a [String], used: &mut [bool], flag: &str) -> Option<Option<&'a str>> {
        let index = args.iter().position(|arg| arg == flag)?;
        used[index] = true;
        match args.get(index + 1) {
            Some(value) => {
                used[index + 1] = true;
                Some(Some(value.as_str()))
            }
            None => Some(None),
        }
    }

    fn path_option(args: &[String], used: &mut [bool], flag: &str) -> Result<Option<PathBuf>> {
        match Self::option(args, used, flag) {
            None => Ok(None),
            Some(value) => {
                let value = require_parse(value, format!("Missing value for {flag}"))?;
                Ok(Some(PathBuf::from(value)))
            }
        }
    }
}

pub fn ignored_argument_warning(arg: &str) -> String {
    format!("\"{arg}\" is not a valid parameter. It will be skipped.")
}
