pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod logger;
pub mod transcoder;

use self::{
    configuration::{Configuration, OutputFormat},
    logger::{Logger, PartialLogger},
    transcoder::{render, Transcoder},
};
use std::{
    io::{self, BufRead, Write},
    process,
};

/// Transcodes `input` line by line and returns the number of lines that failed. Failed lines are
/// reported on `errors` and do not stop processing.
fn transcode_lines(
    transcoder: &Transcoder,
    output_format: OutputFormat,
    progress: &mut PartialLogger,
    input: impl BufRead,
    mut output: impl Write,
    mut errors: impl Write,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut failures = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        progress.log(|count| format!("{} lines processed", count));
        let result = transcoder.transcode(&line);
        if let Err(error) = &result {
            failures += 1;
            writeln!(errors, "line {}: {}", index + 1, error)?;
        }
        if let Some(rendered) = render(output_format, &line, &result)? {
            writeln!(output, "{}", rendered)?;
        }
    }
    output.flush()?;
    Ok(failures)
}

fn exit_code(failures: usize) -> i32 {
    if failures == 0 {
        0
    } else {
        1
    }
}

fn main() {
    let configuration = match Configuration::from_env() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error.message());
            process::exit(2);
        }
    };

    let logger = Logger::new(configuration.verbose());
    logger.log(format!(
        "Starting {} with {:?} alphabet",
        configuration.mode(),
        configuration.alphabet()
    ));

    let transcoder = Transcoder::new(&configuration);
    let mut progress = PartialLogger::new(configuration.log_interval(), &logger);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = transcode_lines(
        &transcoder,
        configuration.output_format(),
        &mut progress,
        stdin.lock(),
        stdout.lock(),
        io::stderr(),
    );

    match result {
        Ok(failures) => {
            logger.log(format!("Done ({} lines failed)", failures));
            process::exit(exit_code(failures));
        }
        Err(error) => {
            eprintln!("{}", error);
            process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_code, transcode_lines};
    use crate::{
        configuration::Configuration,
        logger::{Logger, PartialLogger},
        transcoder::Transcoder,
    };
    use std::collections::HashMap;

    /// Returns (failures, stdout, stderr).
    fn run(vars: &[(&str, &str)], input: &str) -> (usize, String, String) {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        let configuration = Configuration::from_vars(|key| vars.get(key).cloned()).unwrap();
        let transcoder = Transcoder::new(&configuration);
        let logger = Logger::new(false);
        let mut progress = PartialLogger::new(configuration.log_interval(), &logger);
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let failures = transcode_lines(
            &transcoder,
            configuration.output_format(),
            &mut progress,
            input.as_bytes(),
            &mut output,
            &mut errors,
        )
        .unwrap();
        (failures, String::from_utf8(output).unwrap(), String::from_utf8(errors).unwrap())
    }

    #[test]
    fn continues_after_failed_lines() {
        let (failures, output, errors) = run(&[], "0001\n0g\n00\nzz\n6869\n");
        assert_eq!(failures, 2);
        assert_eq!(output, "12\n1\n8wr\n");
        assert!(errors.starts_with("line 2: "));
        assert_eq!(errors.lines().count(), 2);
        assert!(errors.lines().nth(1).unwrap().starts_with("line 4: "));
        assert_eq!(exit_code(failures), 1);
    }

    #[test]
    fn all_lines_succeed() {
        let (failures, output, errors) = run(&[("MODE", "decode-check")], "1Wh4bh\n3QJmnh\n");
        assert_eq!((failures, output.as_str(), errors.as_str()), (0, "00\n\n", ""));
        assert_eq!(exit_code(failures), 0);
    }

    #[test]
    fn crlf_line_endings() {
        let (failures, output, _) = run(&[("BINARY_FORMAT", "utf8")], "hello world\r\na\r\n");
        assert_eq!(failures, 0);
        assert_eq!(output, "StV1DL6CwTryKyV\n2g\n");
    }

    #[test]
    fn json_records_for_every_line() {
        let (failures, output, _) = run(&[("MODE", "decode"), ("OUTPUT", "json")], "12\n0\n");
        assert_eq!(failures, 1);
        assert_eq!(
            output,
            "{\"input\":\"12\",\"output\":\"0001\"}\n{\"input\":\"0\",\"error\":\"Invalid character '0' at index 0\"}\n"
        );
    }
}
