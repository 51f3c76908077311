use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use unit_convert::core::numeric::parse_number;
use unit_convert::utils::{logger, validation::Validate};
use unit_convert::{
    Cli, Command, Comparator, ComparisonResult, ConversionEngine, ConversionReport, ConvertError,
    ConvertRequest, ConverterConfig, Domain, GlobalOptions, Larger, Measurement, PrecisionConfig,
};

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    // 轉換參數後面的旗標也要生效，所以在初始化日誌前先合併
    let request = cli.convert_request();

    // 初始化日誌
    logger::init_cli_logger(cli.options.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let result = request
        .map_err(anyhow::Error::from)
        .and_then(|request| run(&cli, request));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(cli: &Cli, request: Option<ConvertRequest>) -> anyhow::Result<()> {
    let config = load_config(&cli.options)?;
    let engine = ConversionEngine::new(config);
    let mut out = io::stdout().lock();

    if let Command::Compare {
        value1,
        unit1,
        value2,
        unit2,
    } = &cli.command
    {
        let result = Comparator::new(&engine).compare_measurements(
            value1.as_str(),
            unit1,
            value2.as_str(),
            unit2,
        )?;
        tracing::debug!("Comparison result: {:?}", result);

        if cli.options.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)
                .map_err(ConvertError::from)?;
        } else {
            print_comparison(&mut out, value1, unit1, value2, unit2, &result)
                .map_err(ConvertError::from)?;
        }
    }

    if let Some(request) = request {
        let result = engine.convert_named(
            &request.type_name,
            request.value.as_str(),
            request.from.as_deref(),
            request.to.as_deref(),
        )?;
        tracing::debug!("{:?} -> {}", request, result);

        if cli.options.json {
            let domain: Domain = request.type_name.parse()?;
            let (from, to) =
                engine.resolve_units(domain, request.from.as_deref(), request.to.as_deref())?;
            let report = ConversionReport {
                domain,
                input: Measurement::new(parse_number(&request.value)?, from),
                output: Measurement::new(result, to),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)
                .map_err(ConvertError::from)?;
        } else {
            writeln!(out, "{}", result).map_err(ConvertError::from)?;
        }
    }

    out.flush().map_err(ConvertError::from)?;
    Ok(())
}

fn load_config(options: &GlobalOptions) -> anyhow::Result<ConverterConfig> {
    let mut config = match &options.config {
        Some(path) => ConverterConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => {
            tracing::debug!("No config file given, using built-in defaults");
            ConverterConfig::builtin()
        }
    };

    // 應用命令列覆蓋設定
    if let Some(places) = options.precision {
        config.precision = Some(PrecisionConfig::Global(places));
        tracing::debug!("Precision overridden to: {}", places);
    }

    config.validate()?;
    Ok(config)
}

fn print_comparison(
    out: &mut impl Write,
    value1: &str,
    unit1: &str,
    value2: &str,
    unit2: &str,
    result: &ComparisonResult,
) -> io::Result<()> {
    let unit = result.unit;
    writeln!(out, "{} {} = {} {}", value1, unit1, result.value1, unit)?;
    writeln!(out, "{} {} = {} {}", value2, unit2, result.value2, unit)?;
    writeln!(out, "Difference: {} {}", result.difference, unit)?;

    match result.larger {
        Larger::First => writeln!(
            out,
            "{} {} is larger by {} {}",
            value1, unit1, result.difference, unit
        ),
        Larger::Second => writeln!(
            out,
            "{} {} is larger by {} {}",
            value2, unit2, result.difference, unit
        ),
        Larger::Equal => writeln!(out, "Both values are equal"),
    }
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    tracing::debug!("Command failed: {:?}", err);

    match err.downcast_ref::<ConvertError>() {
        Some(e) => {
            // 有 context 時保留完整錯誤鏈
            let message = if err.chain().count() > 1 {
                format!("{:#}", err)
            } else {
                e.user_friendly_message()
            };
            eprintln!("Error: {}", message);
            eprintln!("Hint: {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
        None => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
