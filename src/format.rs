use std::io::{self, Write};

use crate::client::Prediction;

/// Render a prediction as one header line plus two lines per result, in the
/// order the service returned them.
pub fn write_results<W: Write>(out: &mut W, prediction: &Prediction) -> io::Result<()> {
    writeln!(out, "Prediction results:")?;
    for result in &prediction.results {
        writeln!(out, "Predicted class name: {}", result.display_name)?;
        writeln!(out, "Predicted class score: {}", result.score)?;
    }
    Ok(())
}
