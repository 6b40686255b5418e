use surfacing_sim::dynamics::ThrustedAscent;
use surfacing_sim::sim;
use surfacing_sim::vehicle::presets;
use surfacing_sim::SimConfig;

fn main() -> anyhow::Result<()> {
    let config = SimConfig { dt: 0.01, max_time: 600.0, policy: None };

    for (name, params) in [
        ("Ballast blow", presets::ballast_blow()),
        ("Vertical thruster", presets::vertical_thruster()),
    ] {
        let vehicle = ThrustedAscent::new(params);
        let run = sim::simulate(&vehicle, &config)?;
        let last = run.last();

        println!("{}", name);
        println!("  {}", run.status_message());
        println!("  Downrange:  {:>9.1} m", last.x);
        println!("  Mass:       {:>9.1} kg -> {:.1} kg", run.initial().mass, last.mass);
        println!("  Thrust:     [{:.0}, {:.0}] N", vehicle.thrust_vector().x, vehicle.thrust_vector().y);
        println!();
    }
    Ok(())
}
