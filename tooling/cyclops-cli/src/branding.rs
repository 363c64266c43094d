use colored::*;

pub fn print_logo() {
    let logo = r#"
   ____           _
  / ___|   _  ___| | ___  _ __  ___
 | |  | | | |/ __| |/ _ \| '_ \/ __|
 | |__| |_| | (__| | (_) | |_) \__ \
  \____\__, |\___|_|\___/| .__/|___/
       |___/             |_|
"#;
    println!("{}", logo.cyan().bold());
    println!(
        "{}",
        "      Method Complexity & Identifier Linting for Rust"
            .white()
            .italic()
    );
    println!("{}", "      v0.1.0 | One eye on every branch".dimmed());
    println!();
}
