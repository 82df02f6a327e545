use fieldcalc::prelude::*;

fn main() -> Result<(), FieldcalcError> {
    // Petroleum screening numbers for a light crude producer.
    let api = api_gravity(0.85)?; // SG at 60°F
    let gor = gor_from_rates(500_000.0, 1_000.0)?; // scf/d over STB/d
    let rate = darcy_flow_rate(100.0, 500.0, 200.0, 2.0, 50.0, 1.25)?;
    println!("API gravity:      {:.2} deg", api);
    println!("GOR:              {:.1} scf/STB", gor);
    println!("Darcy flow rate:  {:.2} STB/d", rate);

    // Plant-side electrical checks.
    let load = three_phase_power_kw(400.0, 10.0, 0.9)?;
    let eta = motor_efficiency(7.5, 9.2)?;
    println!("3-phase load:     {:.4} kW", load);
    println!("Motor efficiency: {:.3}", eta);

    // Line quality and demand forecasting.
    let effectiveness = oee(0.92, 0.88, 0.97)?;
    let defects = defect_rate(3.0, 1_000.0)?;
    let score = z_score(85.0, 70.0, 10.0)?;
    let forecast = exponential_smoothing(100.0, 120.0, 0.3)?;
    println!("OEE:              {:.4}", effectiveness);
    println!("Defect rate:      {:.4}", defects);
    println!("z-score:          {:.2}", score);
    println!("Next forecast:    {:.1}", forecast);

    // NPV of one project across a discount-rate sweep.
    let cashflows = [-1_000.0, 300.0, 420.0, 680.0];
    println!("rate, npv");
    for rate in [0.0, 0.05, 0.08, 0.12, 0.2] {
        println!("{:.2}, {:.2}", rate, npv(rate, &cashflows)?);
    }

    // Returns on the same project, plus interest on the idle capital.
    println!("ROI:              {:.4}", roi(1_400.0, 1_000.0)?);
    println!("Simple interest:  {:.2}", simple_interest(1_000.0, 18, 0.05));
    Ok(())
}
