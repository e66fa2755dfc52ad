use std::io;

use grid::{Grid2D, Grid3D, Point2i};
use misc::*;

/// Walks through the grid containers, printing each step
#[derive(argh::FromArgs)]
struct Args {
    /// only run the named scenario
    #[argh(option)]
    scenario: Option<String>,

    /// list scenario names and exit
    #[argh(switch)]
    list: bool,
}

type Scenario = fn() -> BoxedResult<()>;

const SCENARIOS: &[(&str, Scenario)] = &[
    ("grid2d", grid2d),
    ("grid3d", grid3d),
    ("grid3d-edits", grid3d_edits),
    ("point", point),
];

fn dont_log_time(_: &mut dyn io::Write) -> io::Result<()> {
    Ok(())
}

fn main() {
    let args = argh::from_env::<Args>();
    if args.list {
        for (name, _) in SCENARIOS {
            println!("{}", name);
        }
        return;
    }

    let logger =
        match logging::LoggerBuilder::with_env().and_then(|builder| builder.init(dont_log_time)) {
            Err(e) => {
                eprintln!("failed to setup logging: {}", e);
                std::process::exit(1);
            }
            Ok(l) => l,
        };

    info!("initialized logging"; "level" => ?logger.level());

    if let Err(e) = run(args.scenario.as_deref()) {
        error!("scenario failed: {}", e);
        // exit skips destructors
        drop(logger);
        std::process::exit(1);
    }
}

fn run(only: Option<&str>) -> BoxedResult<()> {
    let selected = SCENARIOS
        .iter()
        .filter(|(name, _)| only.map(|only| only == *name).unwrap_or(true))
        .collect_vec();

    if selected.is_empty() {
        return Err(format!("no scenario named {:?}, try --list", only.unwrap_or_default()).into());
    }

    for (name, scenario) in selected {
        info!("running scenario"; "name" => name);
        println!("=== {} ===", name);
        scenario()?;
    }

    Ok(())
}

fn grid2d() -> BoxedResult<()> {
    let mut grid = Grid2D::filled(5, 3, 10usize);
    grid.print();
    println!("---");

    grid.foreach_mut(|y, x, cell| *cell = x + y);
    grid.print();
    println!("---");

    grid.push_back_column(100);
    grid.push_back_row(200);
    grid.print();
    println!("---");

    grid.resize(4, 6, 777);
    grid.print();
    grid.print_size();
    println!("---");

    grid.insert_column(0, 1)?;
    grid.insert_row(2, 2)?;
    grid.remove_column(grid.width() - 1)?;
    grid.pop_back_rows(2)?;
    grid.print();
    grid.print_size();

    Ok(())
}

fn grid3d() -> BoxedResult<()> {
    let mut grid = Grid3D::filled(3, 2, 4, 10);
    *grid.at_mut(2, 1, 1)? = 0;
    grid.print();
    grid.print_size();

    let slice = grid.slice(2)?;
    println!("slice 2, row 1: {:?}", &slice[1]);

    Ok(())
}

fn grid3d_edits() -> BoxedResult<()> {
    let mut grid = Grid3D::filled(3, 2, 4, 0usize);
    grid.foreach_mut(|z, y, x, cell| *cell = (x + y + z) % 10);
    *grid.at_mut(2, 1, 1)? = 0;
    grid.print();
    println!("---");

    grid.insert_column(1, 9)?;
    grid.print();
    println!("---");

    grid.insert_row(1, 7)?;
    grid.print();
    println!("---");

    grid.insert_depth(1, 5)?;
    grid.print();
    println!("---");

    grid.remove_column(2)?;
    grid.print();
    println!("---");

    grid.remove_row(0)?;
    grid.print();
    println!("---");

    grid.remove_depth(2)?;
    grid.print();
    println!("---");

    grid.resize(5, 5, 5, 8);
    grid.print();
    grid.print_size();
    println!("---");

    grid.resize(7, 3, 2, 0);
    grid.print();
    grid.print_size();

    Ok(())
}

fn point() -> BoxedResult<()> {
    let mut a = Point2i::new(3, 4);
    let b: Point2i = "-1 2".parse()?;

    println!("a = {}, b = {}", a, b);
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / b = {}", a / b);
    println!("-a = {}", -a);
    println!("a * 3 = {}", a * 3);
    println!("a * 1.5 = {}", a * 1.5f32);
    println!("a < b: {}", a < b);

    a.move_by((1, 1));
    println!("a moved by (1, 1) = {}", a);

    let mut grid = Grid2D::with_size(Point2i::new(3, 2), '.')?;
    *grid.at_pos_mut(Point2i::new(2, 1))? = '#';
    grid.print();

    Ok(())
}
