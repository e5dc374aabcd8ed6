use tabula::cli::{Cli, OutputFormat};
use tabula::frame::display::render_grid;
use tabula::{Dataframe, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let mut df = Dataframe::from_csv(&cli.path, cli.delimiter)?;

    if !cli.columns.is_empty() {
        let labels: Vec<&str> = cli.columns.iter().map(String::as_str).collect();
        df = df.select_columns(&labels)?;
    }
    if let Some(n) = cli.head {
        df = df.head(n);
    } else if let Some(n) = cli.tail {
        df = df.tail(n);
    }

    if cli.describe {
        match df.describe() {
            Ok(summary) => print_describe(&summary),
            Err(tabula::FrameError::NoNumericColumns) => {
                println!("No numeric columns to describe");
            }
            Err(e) => return Err(e.into()),
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Table => print_table(&df),
        OutputFormat::Csv => print_csv(&df),
        OutputFormat::Json => print_json(&df),
    }

    Ok(())
}

fn print_table(df: &Dataframe) {
    print!("{}", df);
    println!("({} rows)", df.row_count());
}

// Statistics are rendered with a fixed precision of 6 decimal places.
fn print_describe(summary: &Dataframe) {
    let labels = summary.labels();
    let cells: Vec<Vec<String>> = summary
        .columns()
        .iter()
        .map(|series| {
            series
                .values()
                .iter()
                .map(|v| match v {
                    Value::Double(d) => format!("{:.6}", d),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();
    print!("{}", render_grid(&labels, &cells));
}

fn print_csv(df: &Dataframe) {
    println!("{}", df.labels().join(","));

    for row in 0..df.row_count() {
        let fields: Vec<String> = df
            .columns()
            .iter()
            .map(|series| {
                let s = series.values()[row].to_string();
                if s.contains(',') || s.contains('"') || s.contains('\n') {
                    format!("\"{}\"", s.replace('"', "\"\""))
                } else {
                    s
                }
            })
            .collect();
        println!("{}", fields.join(","));
    }
}

fn print_json(df: &Dataframe) {
    print!("[");
    for row in 0..df.row_count() {
        if row > 0 {
            print!(",");
        }
        print!("{{");
        for (i, series) in df.columns().iter().enumerate() {
            if i > 0 {
                print!(",");
            }
            let value = &series.values()[row];
            let rendered = match value {
                Value::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
                Value::Null => "null".to_string(),
                other => other.to_string(),
            };
            print!("\"{}\":{}", series.name(), rendered);
        }
        print!("}}");
    }
    println!("]");
}
