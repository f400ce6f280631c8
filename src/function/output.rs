// output.rs
//
// Console formatting matching the scanner tooling convention:
// [+] info (green), [*] warning (yellow), [!] error (red).
use console::style;

pub fn info(message: &str) {
    println!("[{}] {}", style("+").green().bold(), message);
}

pub fn warn(message: &str) {
    println!("[{}] {}", style("*").yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("[{}] {}", style("!").red().bold(), message);
}

/// Session tokens are secrets; only the first and last three characters are
/// ever echoed. Short tokens are masked entirely.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 6 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 3..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}
