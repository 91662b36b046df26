use crate::infra::{
    parse_buyer_type, parse_date, parse_jurisdiction, parse_property_type, parse_purpose,
};
use chrono::NaiveDate;
use clap::Args;
use homebuyer::config::{AppConfig, EstimateDefaults};
use homebuyer::error::AppError;
use homebuyer::telemetry;
use homebuyer::purchase::brackets::format_dollars;
use homebuyer::purchase::{
    compute, BuyerType, Jurisdiction, JurisdictionSummary, PropertyPurpose, PropertyType,
    PurchaseInput, PurchaseReport,
};
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// State or territory code (NSW, VIC, QLD, WA, SA, TAS, ACT, NT)
    #[arg(long, value_parser = parse_jurisdiction)]
    pub(crate) state: Jurisdiction,
    /// Purchase price in dollars
    #[arg(long)]
    pub(crate) value: f64,
    /// home or investment
    #[arg(long, default_value = "home", value_parser = parse_purpose)]
    pub(crate) purpose: PropertyPurpose,
    /// established, newly-constructed or vacant-land
    #[arg(long, default_value = "established", value_parser = parse_property_type)]
    pub(crate) property_type: PropertyType,
    #[arg(long)]
    pub(crate) first_home: bool,
    #[arg(long)]
    pub(crate) foreign: bool,
    #[arg(long)]
    pub(crate) pensioner: bool,
    /// Dependent children (5 means five or more)
    #[arg(long, default_value_t = 0)]
    pub(crate) children: u8,
    /// Gross household income per year
    #[arg(long, default_value_t = 0.0)]
    pub(crate) income: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) deposit: f64,
    /// Loan term in years (defaults to APP_DEFAULT_LOAN_TERM)
    #[arg(long)]
    pub(crate) loan_term: Option<u32>,
    /// Annual interest rate in percent (defaults to APP_DEFAULT_INTEREST_RATE)
    #[arg(long)]
    pub(crate) interest_rate: Option<f64>,
    /// Conveyancing and other fees (defaults to APP_DEFAULT_TRANSACTION_FEES)
    #[arg(long)]
    pub(crate) transaction_fees: Option<f64>,
    /// Property is outside a capital city or regional centre
    #[arg(long)]
    pub(crate) regional: bool,
    /// single or couple
    #[arg(long, default_value = "single", value_parser = parse_buyer_type)]
    pub(crate) buyer: BuyerType,
    /// Contract date (YYYY-MM-DD) checked against the duty schedule
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl EstimateArgs {
    pub(crate) fn into_input(self, defaults: &EstimateDefaults) -> PurchaseInput {
        PurchaseInput {
            state: self.state,
            property_purpose: self.purpose,
            property_value: self.value,
            property_type: self.property_type,
            is_first_home_buyer: self.first_home,
            is_foreign_purchaser: self.foreign,
            is_eligible_pensioner: self.pensioner,
            children_count: self.children,
            yearly_income: self.income,
            deposit_savings: self.deposit,
            loan_term: self.loan_term.unwrap_or(defaults.loan_term),
            interest_rate: self.interest_rate.unwrap_or(defaults.interest_rate),
            transaction_fees: self.transaction_fees.unwrap_or(defaults.transaction_fees),
            is_metro: !self.regional,
            buyer_type: self.buyer,
            as_of: self.as_of,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct JurisdictionsArgs {
    /// Print the listing as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let as_json = args.json;
    let input = args.into_input(&config.estimates);
    let report = compute(&input)?;

    if as_json {
        let body = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print!("{}", render_report(&input, &report));
    }
    Ok(())
}

pub(crate) fn run_jurisdictions(args: JurisdictionsArgs) -> Result<(), AppError> {
    let entries: Vec<JurisdictionSummary> = Jurisdiction::ALL
        .into_iter()
        .map(JurisdictionSummary::from)
        .collect();

    if args.json {
        let body = serde_json::to_string_pretty(&entries).map_err(std::io::Error::from)?;
        println!("{body}");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{:<4} {:<29} {} (from {})",
            entry.code, entry.name, entry.schedule.label, entry.schedule.effective_from
        );
    }
    Ok(())
}

pub(crate) fn render_report(input: &PurchaseInput, report: &PurchaseReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} purchase estimate: {} {} {} at {}",
        report.state.name(),
        report.buyer_type.label(),
        input.property_type.label().to_lowercase(),
        purpose_noun(input.property_purpose),
        money(input.property_value)
    );
    let _ = writeln!(
        out,
        "Schedule: {} (from {})",
        report.schedule.label, report.schedule.effective_from
    );

    let _ = writeln!(out, "\nGovernment fees");
    let _ = writeln!(out, "  Stamp duty             {}", money(report.fees.stamp_duty));
    let _ = writeln!(
        out,
        "  Mortgage registration  {}",
        money(report.fees.mortgage_registration)
    );
    let _ = writeln!(out, "  Land transfer          {}", money(report.fees.land_transfer));
    if let Some(surcharge) = report.fees.foreign_surcharge {
        let _ = writeln!(out, "  Foreign surcharge      {}", money(surcharge));
    }
    let _ = writeln!(out, "  Total                  {}", money(report.fees.total));

    let concession = &report.stamp_duty_concession;
    let _ = writeln!(
        out,
        "\nStamp duty: {} (saves {}) - {}",
        concession.status.label(),
        money(concession.savings),
        concession.description
    );
    let _ = writeln!(out, "{}", report.concession.message);
    let _ = writeln!(out, "{}", report.guarantee_eligibility.reason);

    let loan = &report.loan;
    if loan.amount > 0.0 {
        let _ = writeln!(out, "\nLoan");
        let _ = writeln!(out, "  Amount                 {}", money(loan.amount));
        let _ = writeln!(out, "  LVR                    {:.1}%", loan.lvr);
        let _ = writeln!(out, "  Monthly repayment      {}", money(loan.monthly_repayment));
        let _ = writeln!(
            out,
            "  Total over {} years    {}",
            input.loan_term,
            money(loan.total_repayment)
        );
        let _ = writeln!(out, "  Total interest         {}", money(loan.total_interest));
        let _ = writeln!(out, "  LMI                    {}", loan.lmi);
    }

    let upfront = &report.upfront_costs;
    let _ = writeln!(out, "\nUpfront costs");
    let _ = writeln!(out, "  Deposit                {}", money(upfront.deposit));
    let _ = writeln!(out, "  Transaction fees       {}", money(upfront.transaction_fees));
    if upfront.grant_offset > 0.0 {
        let _ = writeln!(out, "  Grant offset          -{}", money(upfront.grant_offset));
    }
    let _ = writeln!(out, "  Total upfront          {}", money(upfront.total));
    out
}

fn purpose_noun(purpose: PropertyPurpose) -> &'static str {
    match purpose {
        PropertyPurpose::Home => "home",
        PropertyPurpose::Investment => "investment property",
    }
}

fn money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = format_dollars((cents / 100) as f64);
    match cents % 100 {
        0 => format!("{sign}${dollars}"),
        part => format!("{sign}${dollars}.{part:02}"),
    }
}
