pub mod output;
pub mod report;
#[cfg(test)]
mod tests;
