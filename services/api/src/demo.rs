use crate::infra::InMemoryProfileRepository;
use clap::Args;
use farm_risk::assessment::{FarmerRecord, FarmerRiskService, ScoreRequest, ScoreResponse};
use farm_risk::config::AppConfig;
use farm_risk::error::AppError;
use farm_risk::insights::RiskInsights;
use farm_risk::profiles::{
    BehavioralBackground, EngagementLevel, FarmerId, FinancialBackground, Frequency, InputCosts,
    ProductionProfile, RepaymentRecord, SavingsBehavior, Seasonality,
};
use farm_risk::scoring::{RiskAssessment, RiskEngine};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file with optional `production`, `financial`, and `behavioral` sections
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Show the per-factor breakdown for each assessment
    #[arg(long)]
    pub(crate) components: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { input, json } = args;

    let config = AppConfig::load()?;
    let engine = RiskEngine::new(config.scoring);

    let raw = fs::read_to_string(&input)?;
    let response = score_payload(&engine, &raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Risk assessment for {}", input.display());
        render_assessment(&response.assessment, &response.insights, true);
    }

    Ok(())
}

pub(crate) fn score_payload(engine: &RiskEngine, raw: &str) -> Result<ScoreResponse, AppError> {
    let request: ScoreRequest = serde_json::from_str(raw)?;
    let profile = request.into_profile(FarmerId("cli".to_string()));
    let (assessment, insights) = engine.assess(&profile);
    Ok(ScoreResponse {
        assessment,
        insights,
    })
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let repository = Arc::new(InMemoryProfileRepository::default());
    let service = FarmerRiskService::new(repository, RiskEngine::new(config.scoring));

    println!("Farmer risk scoring demo");

    for (step, reference) in reference_farmers().into_iter().enumerate() {
        let title = reference.title;
        let record = save_reference(&service, reference)?;
        println!("\n{}. {} ({})", step + 1, title, record.profile.farmer_id);
        render_assessment(&record.assessment, &record.insights, args.components);

        match serde_json::to_string_pretty(&record.view()) {
            Ok(json) => println!("  Public risk payload:\n{}", json),
            Err(err) => println!("  Public risk payload unavailable: {}", err),
        }
    }

    Ok(())
}

/// A fully described farmer used to show both ends of the risk scale.
#[derive(Debug)]
struct ReferenceFarmer {
    farmer_id: &'static str,
    title: &'static str,
    production: ProductionProfile,
    financial: FinancialBackground,
    behavioral: BehavioralBackground,
}

fn reference_farmers() -> Vec<ReferenceFarmer> {
    vec![
        ReferenceFarmer {
            farmer_id: "demo-strong",
            title: "Strong farmer: consistent saver with an excellent repayment record",
            production: strong_production(),
            financial: strong_financial(),
            behavioral: strong_behavioral(),
        },
        ReferenceFarmer {
            farmer_id: "demo-weak",
            title: "Weak farmer: poor repayment with input costs at the ceiling",
            production: weak_production(),
            financial: weak_financial(),
            behavioral: weak_behavioral(),
        },
    ]
}

/// Registers the farmer and saves each section the way the app would.
fn save_reference(
    service: &FarmerRiskService<InMemoryProfileRepository>,
    reference: ReferenceFarmer,
) -> Result<FarmerRecord, AppError> {
    let farmer_id = FarmerId(reference.farmer_id.to_string());
    service.create(farmer_id.clone())?;
    service.update_production(&farmer_id, reference.production)?;
    service.update_financial(&farmer_id, reference.financial)?;
    let record = service.update_behavioral(&farmer_id, reference.behavioral)?;
    Ok(record)
}

fn render_assessment(assessment: &RiskAssessment, insights: &RiskInsights, components: bool) {
    println!(
        "- Risk score {:.2} -> {} risk",
        assessment.score,
        assessment.category.label()
    );
    println!(
        "  Sub-scores: production {:.2} | financial {:.2} | behavioral {:.2}",
        assessment.sub_scores.production,
        assessment.sub_scores.financial,
        assessment.sub_scores.behavioral
    );
    if components {
        println!("  Factors:");
        for component in &assessment.components {
            println!(
                "    - {:?}: {:.2} x {:.1} ({})",
                component.factor, component.value, component.weight, component.notes
            );
        }
    }
    println!("  {}", insights.summary);
    println!(
        "  Credit terms: {} interest, {} ({})",
        insights.credit_terms.interest_rate_range,
        insights.credit_terms.loan_amount_range,
        insights.credit_terms.eligibility
    );
    if insights.recommendations.is_empty() {
        println!("  Recommendations: none");
    } else {
        println!("  Recommendations:");
        for item in &insights.recommendations {
            println!("    - {item}");
        }
    }
}

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn strong_production() -> ProductionProfile {
    ProductionProfile {
        crop_types: names(&["Maize"]),
        acreage: 3.0,
        seasonality: Seasonality {
            primary: "Long rains".to_string(),
            secondary: Some("Short rains".to_string()),
        },
        ..ProductionProfile::default()
    }
}

fn strong_financial() -> FinancialBackground {
    FinancialBackground {
        income_sources: names(&["Crop Sales"]),
        monthly_income: 50_000.0,
        past_loans: Vec::new(),
        savings_behavior: SavingsBehavior::Consistent,
        repayment_record: RepaymentRecord::Excellent,
        bank_account: true,
        mobile_money_usage: EngagementLevel::High,
    }
}

fn strong_behavioral() -> BehavioralBackground {
    BehavioralBackground {
        data_update_frequency: Frequency::Daily,
        timeliness_score: 1.0,
        training_participation: names(&["Soil health", "Record keeping", "Post-harvest handling"]),
        advisory_engagement: EngagementLevel::High,
        app_usage_frequency: Frequency::Daily,
        profile_completeness: 1.0,
    }
}

fn weak_production() -> ProductionProfile {
    ProductionProfile {
        input_costs: InputCosts {
            seeds: 100_000.0,
            fertilizer: 200_000.0,
            pesticides: 50_000.0,
            labor: 150_000.0,
        },
        ..ProductionProfile::default()
    }
}

fn weak_financial() -> FinancialBackground {
    FinancialBackground {
        savings_behavior: SavingsBehavior::None,
        repayment_record: RepaymentRecord::Poor,
        bank_account: false,
        mobile_money_usage: EngagementLevel::Low,
        ..FinancialBackground::default()
    }
}

fn weak_behavioral() -> BehavioralBackground {
    BehavioralBackground {
        data_update_frequency: Frequency::Rare,
        advisory_engagement: EngagementLevel::Low,
        app_usage_frequency: Frequency::Rare,
        ..BehavioralBackground::default()
    }
}
