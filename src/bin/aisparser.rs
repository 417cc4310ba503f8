use ais::sentence::AssemblyContext;
use ais::DecodeOutcome;
use std::io::{self, BufRead};

fn main() {
    let mut ctx = AssemblyContext::new();
    let stdin = io::stdin();
    let handle = stdin.lock();

    for line in handle.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error reading stdin: {}", err);
                std::process::exit(1);
            }
        };
        match ais::decode_sentence(line.as_bytes(), &mut ctx) {
            DecodeOutcome::Message(record) => println!("{}\t{:?}", line, record),
            DecodeOutcome::Incomplete => println!("{}\t<incomplete>", line),
            DecodeOutcome::Partial24A => println!("{}\t<type 24 part A staged>", line),
            DecodeOutcome::HeaderOnly(header, err) => {
                println!("{}\tmmsi={} <body undecodable: {:?}>", line, header.mmsi, err)
            }
            DecodeOutcome::Error(err) => eprintln!("{}\t{:?}", line, err),
        }
    }
}
