use ap_solver::{EngineConfig, SearchEngine};
use ap_types::{DomainHint, Problem, Variable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Aperture quadratic minimization example");

    // Minimize (x - 3)^2 + (y + 1)^2 over a box around the origin.
    let problem = Problem::new()
        .add_variable(Variable::new("x", -10.0, 10.0, 8.0)?)
        .add_variable(Variable::new("y", -10.0, 10.0, -7.0)?)
        .add_hint(DomainHint::delta(4.0));

    let mut engine = SearchEngine::new(problem, EngineConfig::default())?;
    engine.reset();

    let score = |x: f64, y: f64| (x - 3.0).powi(2) + (y + 1.0).powi(2);
    let mut best_score = {
        let start = engine.best_point().unwrap();
        score(start.value(0), start.value(1))
    };
    println!("starting score: {best_score:.6}");

    for iteration in 0..2000 {
        let point = engine.next_trial_point();
        let trial_score = score(point.value(0), point.value(1));

        // The harness owns the judgment of "better"; here it is a plain
        // comparison.
        if trial_score < best_score {
            best_score = trial_score;
            println!(
                "iteration {iteration}: score {:.6} at ({:.4}, {:.4})",
                trial_score,
                point.value(0),
                point.value(1)
            );
            engine.found_new_optimal_solution(point);
        }
    }

    let best = engine.best_point().unwrap();
    println!(
        "best point: ({:.4}, {:.4}), score {:.6}",
        best.value(0),
        best.value(1),
        best_score
    );
    for (index, variable) in engine.problem().variables().iter().enumerate() {
        if let Some(window) = engine.search_window(index) {
            println!("final window for {}: {window}", variable.name());
        }
    }

    Ok(())
}
