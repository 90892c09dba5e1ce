use std::{env, fs::read_to_string, process, rc::Rc, time::Instant};

use coem::{
    ast::printer::print_program,
    display_error,
    errors::sink::ConsoleReporter,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let print_ast = args.iter().any(|arg| arg == "--ast");
    let files: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if files.len() != 1 {
        eprintln!("usage: coem [--ast] <file>");
        process::exit(64);
    }

    let file_path = files[0].as_str();
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(66);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_path);
            process::exit(65);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let mut reporter = ConsoleReporter::default();
    let statements = parse(tokens, Rc::new(String::from(file_name)), &mut reporter);

    println!("Parsed in {:?}", parse_start.elapsed());

    if reporter.had_error {
        process::exit(65);
    }

    if print_ast {
        println!("{}", print_program(&statements));
    }

    println!("Total time: {:?}", start.elapsed());
}
