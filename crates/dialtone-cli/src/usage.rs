//! The usage contract.
//!
//! Every validation failure prints this exact block to standard output;
//! scripts are known to match on it, so the wording is frozen.

/// Full usage text.
pub const USAGE: &str = "
Usage: ./dialtone X Y Z

 Where X is the name of the Wave file to create
 Where Y is the duration (in seconds) of each dtmf tone,
         valid range is 0.1 - 1.0
 Where Z is the string of digits to create tones for, valid
         digits are 0-9, #, * and - for a duration of silence

Example: ./dialtone wavy.wav 0.3 123-3831

";

/// Prints the usage text to standard output.
pub fn print_usage() {
    print!("{}", USAGE);
}
