//! hexcat binary: argument intake, dispatch, and exit-status policy.

mod render;

use std::env;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;

use hexcat_core::{Error, Request, extract, resolve, stream, validate};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Argument problems diagnose to stderr but are not process faults:
    // every path below exits zero except the reversal data fault.
    if let Err(err) = validate(&args) {
        render::grammar_error(err);
        render::usage();
        return;
    }

    let request = match resolve(&extract(&args)) {
        Ok(request) => request,
        Err(err) => {
            render::combination_error(err);
            render::usage();
            return;
        }
    };

    match execute(request) {
        Ok(()) => {}
        // A syntactically fine width outside the accepted range degrades
        // to the usage text, not an error.
        Err(Error::WidthOutOfRange { .. }) => render::usage(),
        Err(err @ Error::InvalidHexByte { .. }) => {
            render::stream_fault(&err);
            process::exit(1);
        }
        // Stream errors end the run the way end-of-stream does; broken
        // pipes are the everyday case and stay silent.
        Err(Error::Io(err)) => {
            if err.kind() != io::ErrorKind::BrokenPipe {
                render::io_note(&err);
            }
        }
    }
}

/// Run the selected transformer over locked, buffered standard streams.
fn execute(request: Request) -> hexcat_core::Result<()> {
    let mut input = BufReader::new(io::stdin().lock());
    let mut output = BufWriter::new(io::stdout().lock());
    let result = match request {
        Request::Dump { skip, count } => stream::dump::run(&mut input, &mut output, skip, count),
        Request::RawHex => stream::rawhex::run(&mut input, &mut output),
        Request::Reverse => stream::reverse::run(&mut input, &mut output),
        Request::Split { width } => stream::split::run(&mut input, &mut output, width),
    };
    // Flush what was produced even when the run failed midway.
    let flushed = output.flush().map_err(Error::from);
    result.and(flushed)
}
