#![allow(non_snake_case)]
use RustedCalculus::Utils::logger::init_logger;
use RustedCalculus::Utils::settings::Settings;
use RustedCalculus::symbolic::composite::{ChainBuilder, CompositeChain};
use RustedCalculus::symbolic::function::{Differentiable, Function};
use RustedCalculus::symbolic::operations::{Addition, Multiplication, Subtraction};
use RustedCalculus::symbolic::primitives::{Exponential, Logarithm, PolyTerm};
use log::{error, info};
use std::error::Error;

// usage: RustedCalculus [settings.toml] [example number]
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::from_file(&path)?,
        None => Settings::default(),
    };
    if let Some(path) = init_logger(&settings.logging)? {
        info!("logging to {}", path.display());
    }
    let examples: Vec<usize> = match args.next() {
        Some(n) => vec![n.parse()?],
        None => (0..=5).collect(),
    };
    for example in examples {
        if let Err(e) = run_example(example, &settings) {
            error!("example {} failed: {}", example, e);
            return Err(e);
        }
    }
    Ok(())
}

fn run_example(example: usize, settings: &Settings) -> Result<(), Box<dyn Error>> {
    info!("running example {}", example);
    match example {
        0 => {
            // POWER RULE
            let f: Function = PolyTerm::new(3.0, 2.0).into();
            let df = f.differentiate();
            println!("f = {}, f' = {}", f, df);
            println!("f(2) = {}, f'(2) = {}", f.compute(2.0)?, df.compute(2.0)?);
            // derivative of a constant is the zero constant
            let c: Function = PolyTerm::constant(5.0).into();
            println!("({})' = {}", c, c.differentiate());
            // terms of equal power are merged when a sum is built
            let sum = Addition::new(vec![PolyTerm::new(2.0, 3.0).into(), PolyTerm::new(5.0, 3.0).into()]);
            println!("2x^3 + 5x^3 = {}", sum);
        }
        1 => {
            // SUM, PRODUCT AND DIFFERENCE
            let f: Function = Multiplication::new(vec![
                PolyTerm::new(1.0, 2.0).into(),
                Exponential::natural().into(),
            ])
            .into();
            let df = f.differentiate();
            println!("f = {}, f' = {}", f, df);
            println!("f'(1) = {} (3e = {})", df.compute(1.0)?, 3.0 * std::f64::consts::E);
            let g: Function =
                Subtraction::new(Exponential::new(2.0).into(), PolyTerm::new(4.0, 1.0).into()).into();
            println!("g = {}, g' = {}, g'(0) = {}", g, g.differentiate(), g.differentiate().compute(0.0)?);
        }
        2 => {
            // CHAIN RULE
            // e^(2x)
            let mut chain = CompositeChain::new();
            chain.append_end(Exponential::natural().into());
            chain.append_end(PolyTerm::new(2.0, 1.0).into());
            let f: Function = chain.into();
            let df = f.differentiate();
            println!("f = {}, f' = {}, f'(0) = {}", f, df, df.compute(0.0)?);
            // ln(e^(x^2) + 1)
            let mut builder = ChainBuilder::new();
            builder
                .append_end(Logarithm::natural().into())
                .append_end(Function::from(Exponential::natural()) + Function::from(PolyTerm::constant(1.0)))
                .append_end(PolyTerm::new(1.0, 2.0).into());
            let g: Function = builder.build().into();
            let dg = g.differentiate();
            println!("g = {}, g' = {}", g, dg);
            let (norm, passed) = g.compare_num(-2.0, 2.0, &settings.validation)?;
            println!("norm of difference with finite differences = {:e}, passed = {}", norm, passed);
        }
        3 => {
            // LOGARITHMS AND THE DOMAIN
            let log10: Function = Logarithm::new(10.0).into();
            println!("{} at 100 = {}", log10, log10.compute(100.0)?);
            println!("({})' = {}", log10, log10.differentiate());
            match log10.compute(-1.0) {
                Ok(value) => println!("unexpected value {}", value),
                Err(e) => println!("{} at -1: {}", log10, e),
            }
            let values = log10.compute_on_linspace(1.0, 1000.0, 4, &settings.evaluation)?;
            println!("values on linspace = {:?}", values);
        }
        4 => {
            // TAYLOR POLYNOMIALS
            let exp: Function = Exponential::natural().into();
            let taylor = exp.taylor_polynomial(0.0, 5)?;
            println!("Taylor polynomial of {} = {}", exp, taylor);
            println!("at 0.5: {} vs {}", taylor.compute(0.5)?, exp.compute(0.5)?);
            let ln: Function = Logarithm::natural().into();
            let taylor = ln.taylor_polynomial(1.0, 3)?;
            println!("Taylor polynomial of {} around 1 = {}", ln, taylor);
        }
        5 => {
            // REPEATED DERIVATIVES AND PARALLEL EVALUATION
            let f = Function::from(PolyTerm::new(1.0, 4.0)) * Function::from(Exponential::new(3.0));
            for n in 0..=3 {
                println!("order {}: {}", n, f.nth_derivative(n));
            }
            let df = f.nth_derivative(2);
            println!("f''(1) = {} (in parallel: {})", df.compute(1.0)?, df.compute_par(1.0)?);
            let grid = df.compute_on_linspace(0.0, 1.0, 4096, &settings.evaluation)?;
            println!("evaluated on {} points, last value {:?}", grid.len(), grid.last());
        }
        _ => {
            println!("example not found");
        }
    }
    Ok(())
}
