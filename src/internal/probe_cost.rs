#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use plotters::prelude::*;
use rand::Rng;

// Simulation parameters
const TABLE_SIZE: usize = 100_000;
// Create load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;

// Collision-resolution strategies to compare
const STRATEGIES: [&str; 3] = ["Quadratic Probing", "Linear Probing", "Separate Chaining"];
const MAX_PROBES: usize = 100; // Prevent unbounded probe walks

// Insert with quadratic probing, returning the number of slots examined
fn quadratic_insert(table: &mut Vec<Option<u64>>, key: u64) -> usize {
    let home = (key % TABLE_SIZE as u64) as usize;

    for i in 0..MAX_PROBES {
        let index = (home + i * i) % TABLE_SIZE;
        if table[index].is_none() {
            table[index] = Some(key);
            return i + 1;
        }
    }

    MAX_PROBES
}

// Insert with linear probing, returning the number of slots examined
fn linear_insert(table: &mut Vec<Option<u64>>, key: u64) -> usize {
    let home = (key % TABLE_SIZE as u64) as usize;

    for i in 0..MAX_PROBES {
        let index = (home + i) % TABLE_SIZE;
        if table[index].is_none() {
            table[index] = Some(key);
            return i + 1;
        }
    }

    MAX_PROBES
}

// Insert into a chained table, returning the resulting chain length
// (the cost of the membership walk an insert performs)
fn chained_insert(table: &mut Vec<Vec<u64>>, key: u64) -> usize {
    let index = (key % TABLE_SIZE as u64) as usize;
    table[index].push(key);
    table[index].len()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    // Calculate number of keys for each load factor
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Results storage
    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); STRATEGIES.len()];
    let mut worst_case_probes: Vec<Vec<usize>> = vec![Vec::new(); STRATEGIES.len()];

    // Generate random keys outside the loop to ensure fair comparison
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap();
    let keys: Vec<u64> = (0..max_keys_needed).map(|_| rng.random_range(1..u64::MAX)).collect();

    // Running experiments
    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);

        for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
            let mut probes_list: Vec<usize> = Vec::with_capacity(n_keys);

            match strategy {
                "Quadratic Probing" => {
                    let mut table: Vec<Option<u64>> = vec![None; TABLE_SIZE];
                    for &key in keys.iter().take(n_keys) {
                        probes_list.push(quadratic_insert(&mut table, key));
                    }
                }
                "Linear Probing" => {
                    let mut table: Vec<Option<u64>> = vec![None; TABLE_SIZE];
                    for &key in keys.iter().take(n_keys) {
                        probes_list.push(linear_insert(&mut table, key));
                    }
                }
                "Separate Chaining" => {
                    let mut table: Vec<Vec<u64>> = vec![Vec::new(); TABLE_SIZE];
                    for &key in keys.iter().take(n_keys) {
                        probes_list.push(chained_insert(&mut table, key));
                    }
                }
                _ => panic!("Unknown strategy"),
            }

            // Calculate statistics
            let avg_probes = probes_list.iter().sum::<usize>() as f64 / probes_list.len() as f64;
            let worst_case = *probes_list.iter().max().unwrap_or(&0);

            average_probes[strategy_idx].push(avg_probes);
            worst_case_probes[strategy_idx].push(worst_case);

            println!("  {}: Avg probes = {:.2}, Worst = {}", strategy, avg_probes, worst_case);
        }
    }

    // Plot configuration
    let font_family = "sans-serif";

    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
        RGBColor(50, 180, 50), // Bright green
    ];

    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Create custom x-axis labels
    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    // Plot 1: Average probe cost per insert
    let root = BitMapBackend::new("average_probe_cost.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = average_probes
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Probe Cost per Insert", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_avg)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Average Probes per Insert")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
        let color = &colors[strategy_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, average_probes[strategy_idx][i])),
                line_style,
            ))?
            .label(strategy)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, average_probes[strategy_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: Worst-case probe cost
    let root = BitMapBackend::new("worst_case_probe_cost.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_worst = worst_case_probes
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Worst-Case Probe Cost", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_worst)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Worst-Case Probes")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Threshold line where probe walks start getting truncated
    let threshold_style = ShapeStyle::from(&RED.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            vec![(0, MAX_PROBES as f64 / 2.0), (num_keys.len() - 1, MAX_PROBES as f64 / 2.0)],
            threshold_style,
        ))?
        .label("Warning Threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
        let color = &colors[strategy_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, worst_case_probes[strategy_idx][i] as f64)),
                line_style,
            ))?
            .label(strategy)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, worst_case_probes[strategy_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!(
        "Generated plot images: average_probe_cost.png, worst_case_probe_cost.png"
    );

    Ok(())
}
