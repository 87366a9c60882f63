use particle_swarm::{functions, ConsoleReporter, SearchSpace, Swarm};
use plotters::prelude::*;

fn main() {
    println!("Testing the particle swarm");

    // One {x,y} agent; append more pairs to the template for additional
    // independent agents sharing the same bound set.
    let template = vec![0.0, 0.0];
    let boundaries = vec![(-3.0, 3.0), (-2.0, 2.0)];

    // Choose wisely so particles do not rush around the solution space.
    let max_velocity = 0.0001;

    let space = SearchSpace::new(boundaries, max_velocity).unwrap();
    let mut swarm = Swarm::new(template, space, functions::six_hump_camelback);

    // Fixed seed so the trial can be repeated and recorded.
    let seed = 3611;
    swarm.set_rng_seed(seed);
    swarm.set_observer(Box::new(ConsoleReporter));

    println!(
        "rho1={}\trho2={}\trho={}\tK={}\tmaxVel={}",
        swarm.rho1(),
        swarm.rho2(),
        swarm.rho(),
        swarm.k(),
        max_velocity,
    );
    println!("boundary: {:?}", swarm.boundaries());

    println!("running swarm...");
    let best = swarm.run(100_000, 10).unwrap();

    println!(
        "Best found solution: ( {} ) {}\tseed={}",
        best.iter()
            .map(|&x| format!("{:.6}", x))
            .collect::<Vec<String>>()
            .join(" "),
        swarm.global_best_value(),
        seed,
    );
    println!("global minima: (0.0898, -0.7126) and (-0.0898, 0.7126), value -1.031628");

    plot_history(
        swarm.history(),
        "convergence_history.png",
        "Global Best History",
    )
    .unwrap();
}

/// Plots the global-best value per iteration.
///
/// # Parameters
/// - `history`: the global-best value recorded after each iteration.
/// - `file_name`: path of the PNG to write.
/// - `title`: caption drawn above the chart.
///
/// # Returns
/// A `Result` containing `Ok` if the plot was successfully generated, or an
/// `Err` if an error occurred.
fn plot_history(
    history: &[f64],
    file_name: &str,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(file_name, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    if history.is_empty() {
        return Err("History is empty, cannot generate plot.".into());
    }

    let max_value = *history
        .iter()
        .max_by(|a, b| a.partial_cmp(b).unwrap())
        .unwrap();
    let min_value = *history
        .iter()
        .min_by(|a, b| a.partial_cmp(b).unwrap())
        .unwrap();
    let span = (max_value - min_value).max(1e-9);
    let iterations = history.len();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            0..iterations,
            (min_value - 0.05 * span)..(max_value + 0.05 * span),
        )?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(
            history.iter().enumerate().map(|(x, &y)| (x, y)),
            &BLUE,
        ))?
        .label("Global Best")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("Convergence diagram saved as {}", file_name);

    Ok(())
}
