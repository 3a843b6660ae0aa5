mod config;
mod run;
