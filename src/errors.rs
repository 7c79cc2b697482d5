// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// Callers can `links` this module into their own `error_chain!`.
use error_chain::*;

use crate::grid::CellLinkError;
use crate::units::{Height, Width};

error_chain! {

    errors {
        InvalidGridDimensions(width: Width, height: Height) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {} x {}: both must be at least 1 and addressable",
                    width.0, height.0)
        }

        PassageCarve(err: CellLinkError) {
            description("failed to carve a passage")
            display("failed to carve a passage: {:?}", err)
        }

        GridMismatch(expected: (Width, Height), found: (Width, Height)) {
            description("carver stepped with a different grid")
            display("carver started on a {} x {} grid but was stepped with a {} x {} grid",
                    (expected.0).0, (expected.1).0, (found.0).0, (found.1).0)
        }

        EmptyVisitStack {
            description("dead end with an empty visit stack")
            display("dead end reached with unvisited cells left and nothing to backtrack to")
        }
    }
}
