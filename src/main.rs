use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
	let mut args = env::args().skip(1);
	let (corpus, pattern) = match (args.next(), args.next()) {
		(Some(corpus), Some(pattern)) => (corpus, pattern),
		_ => {
			eprintln!("usage: mnsearch-demo <corpus> <pattern>");
			return ExitCode::FAILURE;
		}
	};

	let range = mnsearch::search::search(corpus.as_bytes(), pattern.as_bytes());

	if range.start == corpus.len() && !pattern.is_empty() {
		println!("no match");
		ExitCode::SUCCESS
	} else {
		println!("match at {}..{}: {:?}", range.start, range.end, &corpus[range]);
		ExitCode::SUCCESS
	}
}
