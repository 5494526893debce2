// Copyright 2015 Google Inc. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Command line tool to exercise milldown.

#![forbid(unsafe_code)]

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

fn brief(program: &str) -> String {
    format!(
        "Usage: {} [options] [FILE..]\n\n{}",
        program, "Reads CommonMark from files or standard input and emits HTML.",
    )
}

fn convert_to_stdout(input: &str) -> io::Result<()> {
    let doc = milldown::parse_document(input);
    let stdout = io::stdout();
    let buffer = io::BufWriter::with_capacity(1024 * 1024, stdout.lock());
    milldown::html::write_html_io(buffer, &doc)
}

fn dry_run(input: &str) {
    let doc = milldown::parse_document(input);
    println!(
        "{} blocks, {} reference definitions",
        doc.blocks().len(),
        doc.reference_definitions().len()
    );
}

pub fn main() -> io::Result<()> {
    let args: Vec<_> = env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "this help message");
    opts.optflag("d", "dry-run", "parse only, produce no output");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}\n{}", f, opts.usage(&brief(&args[0])));
            std::process::exit(1);
        }
    };
    if matches.opt_present("help") {
        println!("{}", opts.usage(&brief(&args[0])));
        return Ok(());
    }

    let mut input = String::new();
    if !matches.free.is_empty() {
        for filename in &matches.free {
            let real_path = PathBuf::from(filename);
            let mut f = File::open(&real_path)?;
            input.clear();
            f.read_to_string(&mut input)?;
            if matches.opt_present("dry-run") {
                dry_run(&input);
            } else {
                convert_to_stdout(&input)?;
            }
        }
    } else {
        io::stdin().lock().read_to_string(&mut input)?;
        if matches.opt_present("dry-run") {
            dry_run(&input);
        } else {
            convert_to_stdout(&input)?;
        }
    }
    io::stdout().flush()
}
