//! Two independent components initializing from one shared reader.

use config_yaml::{AppContext, ConfigEnum, ConfigReader, Error};

/// Iteration limits read by the solver.
#[derive(Debug)]
#[allow(dead_code)]
struct SolverParams {
    max_iterations: u32,
    batch_size: u32,
    warmup_steps: u32,
    checkpoint_every: u32,
    seed: u32,
    threads: u32,
}

impl SolverParams {
    fn read(reader: &ConfigReader, section: &str) -> Result<Self, Error> {
        Ok(Self {
            max_iterations: reader.read_scalar(section, "max_iterations")?,
            batch_size: reader.read_scalar(section, "batch_size")?,
            warmup_steps: reader.read_scalar(section, "warmup_steps")?,
            checkpoint_every: reader.read_scalar(section, "checkpoint_every")?,
            seed: reader.read_scalar(section, "seed")?,
            threads: reader.read_scalar(section, "threads")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interpolation {
    Undefined,
    Linear,
    Cubic,
    Other(i64),
}

impl ConfigEnum for Interpolation {
    fn from_repr(repr: i64) -> Self {
        match repr {
            0 => Interpolation::Undefined,
            1 => Interpolation::Linear,
            2 => Interpolation::Cubic,
            other => Interpolation::Other(other),
        }
    }

    fn repr(&self) -> i64 {
        match self {
            Interpolation::Undefined => 0,
            Interpolation::Linear => 1,
            Interpolation::Cubic => 2,
            Interpolation::Other(other) => *other,
        }
    }
}

/// Display settings read by the plotter.
#[derive(Debug)]
#[allow(dead_code)]
struct PlotterParams {
    title: String,
    x_label: String,
    y_label: String,
    palette: String,
    window_size: [f64; 2],
    margin: [f64; 2],
    series: Vec<String>,
    interpolation: Interpolation,
}

impl PlotterParams {
    fn read(reader: &ConfigReader, section: &str) -> Result<Self, Error> {
        Ok(Self {
            title: reader.read_scalar(section, "title")?,
            x_label: reader.read_scalar(section, "x_label")?,
            y_label: reader.read_scalar(section, "y_label")?,
            palette: reader.read_scalar(section, "palette")?,
            window_size: reader.read_array(section, "window_size")?,
            margin: reader.read_array(section, "margin")?,
            series: reader.read_vector(section, "series")?,
            interpolation: reader.read_enum(section, "interpolation")?,
        })
    }
}

fn main() -> Result<(), Error> {
    let ctx = AppContext::builder()
        .with_reader(ConfigReader::from_file("demos/configurable.yaml")?)
        .build()?;

    let solver = SolverParams::read(ctx.reader(), "solver")?;
    let plotter = PlotterParams::read(ctx.reader(), "plotter")?;

    println!("solver:  {solver:#?}");
    println!("plotter: {plotter:#?}");

    let gain: config_yaml::Matrix<f64> = ctx.reader().read_matrix("solver", "gain")?;
    for row in 0..gain.rows() {
        println!("gain[{row}] = {:?}", gain.row(row).unwrap_or(&[]));
    }

    Ok(())
}
