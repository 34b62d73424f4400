use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Built-in name list used when no replacement is configured.
pub const DEFAULT_NAMES: [&str; 8] = [
    "sujana", "suhas", "suman", "sumith", "lanka", "sumukhi", "kalyani", "kaushik",
];

/// Configurable options
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Names to run the prefix filter over
    pub names: Vec<String>,
    /// Case-sensitive prefix used by the name filter
    pub prefix: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
            prefix: "su".to_string(),
        }
    }
}

/// Trial division up to floor(sqrt(x)). Anything below 2 is not prime.
pub fn is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }
    let mut i = 2;
    while i <= x / i {
        if x % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

pub fn sum(list: &[i64]) -> i64 {
    list.iter().sum()
}

/// Mean of the list; 0.0 for an empty list rather than an error.
pub fn average(list: &[i64]) -> f64 {
    if list.is_empty() {
        return 0.0;
    }
    sum(list) as f64 / list.len() as f64
}

/// Largest element, or `None` for an empty list.
pub fn max(list: &[i64]) -> Option<i64> {
    list.iter().copied().max()
}

pub fn even_count(list: &[i64]) -> usize {
    list.iter().filter(|&&x| x % 2 == 0).count()
}

/// Primes from the list, in original order.
pub fn filter_primes(list: &[i64]) -> Vec<i64> {
    list.iter().copied().filter(|&x| is_prime(x)).collect()
}

/// Elements in [100, 999], in original order.
pub fn filter_three_digit(list: &[i64]) -> Vec<i64> {
    list.iter().copied().filter(|&x| (100..=999).contains(&x)).collect()
}

/// Names starting with `prefix` (case-sensitive), in original order.
pub fn filter_name_prefix<'a>(names: &'a [String], prefix: &str) -> Vec<&'a str> {
    names
        .iter()
        .filter(|n| n.starts_with(prefix))
        .map(String::as_str)
        .collect()
}

/// Whitespace-token reader over any buffered input.
/// Lines are split lazily so prompts can be written before each read.
struct TokenReader<R: BufRead> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| format!("read error: {e}"))?;
            if read == 0 {
                return Err("unexpected end of input".to_string());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_int(&mut self) -> Result<i64, String> {
        let token = self.next_token()?;
        token
            .parse::<i64>()
            .map_err(|_| format!("expected an integer, got \"{token}\""))
    }
}

/// Run the whole analysis: read N and N integers from `input`, write every
/// section to `out` in fixed order. Any input or write failure aborts with a
/// descriptive message.
pub fn analyze<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: &AnalyzerConfig,
) -> Result<(), String> {
    let werr = |e: std::io::Error| format!("write error: {e}");

    let mut reader = TokenReader::new(input);

    writeln!(out, "Enter number of elements: ").map_err(werr)?;
    out.flush().map_err(werr)?;
    let n = reader.next_int()?;
    if n < 0 {
        return Err(format!("element count must be non-negative, got {n}"));
    }

    writeln!(out, "Enter {n} elements: ").map_err(werr)?;
    out.flush().map_err(werr)?;
    let mut numbers = Vec::with_capacity(n as usize);
    for _ in 0..n {
        numbers.push(reader.next_int()?);
    }

    writeln!(out, "Prime numbers: ").map_err(werr)?;
    for x in filter_primes(&numbers) {
        write!(out, "{x} ").map_err(werr)?;
    }

    writeln!(out, "\n 3 digit numbers: ").map_err(werr)?;
    for x in filter_three_digit(&numbers) {
        write!(out, "{x} ").map_err(werr)?;
    }

    writeln!(out, "\nNames starting with '{}': ", config.prefix).map_err(werr)?;
    for name in filter_name_prefix(&config.names, &config.prefix) {
        writeln!(out, "{name}").map_err(werr)?;
    }

    writeln!(out, "\nNumbers: {numbers:?}").map_err(werr)?;
    writeln!(out, "Sum: {}", sum(&numbers)).map_err(werr)?;
    writeln!(out, "Average: {:.2}", average(&numbers)).map_err(werr)?;
    match max(&numbers) {
        Some(m) => writeln!(out, "Max: {m}").map_err(werr)?,
        None => writeln!(out, "Max: none").map_err(werr)?,
    }
    writeln!(out, "Even Count: {}", even_count(&numbers)).map_err(werr)?;

    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn config_default_sane() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(cfg.prefix, "su");
        assert_eq!(cfg.names.len(), 8);
        assert_eq!(cfg.names[0], "sujana");
    }

    #[test]
    fn prime_edge_cases() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(100));
    }

    #[test]
    fn aggregates_on_known_list() {
        let list = [2, 3, 4, 100, 7];
        assert_eq!(sum(&list), 116);
        assert!((average(&list) - 23.2).abs() < 1e-9);
        assert_eq!(max(&list), Some(100));
        assert_eq!(even_count(&list), 3);
    }

    #[test]
    fn aggregates_on_empty_list() {
        let list: [i64; 0] = [];
        assert_eq!(sum(&list), 0);
        assert_eq!(average(&list), 0.0);
        assert_eq!(max(&list), None);
        assert_eq!(even_count(&list), 0);
    }

    #[test]
    fn even_count_handles_negatives() {
        assert_eq!(even_count(&[-4, -3, 0, 5]), 2);
    }

    #[test]
    fn prime_filter_preserves_order() {
        assert_eq!(filter_primes(&[10, 7, 4, 2, 9, 13]), vec![7, 2, 13]);
        assert!(filter_primes(&[]).is_empty());
    }

    #[test]
    fn three_digit_filter_bounds() {
        assert_eq!(
            filter_three_digit(&[99, 100, 500, 999, 1000, -150]),
            vec![100, 500, 999]
        );
    }

    #[test]
    fn name_prefix_filter_default_list() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(
            filter_name_prefix(&cfg.names, "su"),
            vec!["sujana", "suhas", "suman", "sumith", "sumukhi"]
        );
    }

    #[test]
    fn name_prefix_filter_is_case_sensitive() {
        let names = vec!["Sujana".to_string(), "suhas".to_string()];
        assert_eq!(filter_name_prefix(&names, "su"), vec!["suhas"]);
    }
}
