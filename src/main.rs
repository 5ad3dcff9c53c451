use std::{env, fs::read_to_string, process::exit, time::Instant};

use nanocc::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: nanocc <file>");
        exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    // Handoff point: the code generator consumes the function records
    // as-is for stack-frame layout and instruction emission.
    println!("{} function(s):", program.len());
    for function in &program {
        println!(
            "  {}: {} param(s), {} local(s), {} statement(s)",
            function.name,
            function.params.len(),
            function.locals.len(),
            function.body.len()
        );
    }
}
