use clap::Args;
use credence::assessment::domain::{AssessmentRequest, MediaUpload, Verdict};
use credence::assessment::{AssessmentEngine, SignalCatalog};
use credence::error::AppError;
use credence::reports::{InMemoryReportStore, ReportLedger, ReportSubmission};
use credence::resources::ResourceCatalog;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Claim text to assess
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Source URL to assess
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Score the URL with the link-only weight table
    #[arg(long)]
    pub(crate) link_only: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Resource catalog file for the resources portion of the demo
    #[arg(long, default_value = "config/resources.json")]
    pub(crate) resources: PathBuf,
    /// Skip the report intake portion of the demo
    #[arg(long)]
    pub(crate) skip_reports: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        text,
        url,
        link_only,
    } = args;

    let engine = AssessmentEngine::new(SignalCatalog::standard());
    let request = if link_only {
        AssessmentRequest::Link { url }
    } else {
        AssessmentRequest::Content { text, url }
    };

    let verdict = engine.assess(request).map_err(AppError::from)?;
    render_verdict(&verdict);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        resources,
        skip_reports,
    } = args;

    println!("Credence assessment demo");
    let engine = AssessmentEngine::new(SignalCatalog::standard());

    for (headline, request) in demo_requests() {
        println!("\n{headline}");
        match engine.assess(request) {
            Ok(verdict) => render_verdict(&verdict),
            Err(err) => println!("  Rejected: {err}"),
        }
    }

    if !skip_reports {
        println!("\nReport intake demo");
        let ledger = ReportLedger::new(Arc::new(InMemoryReportStore::default()));
        for submission in demo_reports() {
            let report = ledger.submit(submission);
            println!(
                "- Received report {} -> status {}",
                report.id.0,
                report.status.label()
            );
        }

        let listing = ledger.list();
        println!("\nRecent reports (latest 10 of {})", listing.count);
        for report in listing.reports.iter().rev().take(10) {
            let subject = report
                .url
                .as_deref()
                .or(report.text.as_deref())
                .unwrap_or("(no subject)");
            println!(
                "  - {} | {} | {}",
                report.id.0,
                report.created_at.format("%Y-%m-%d %H:%M:%S"),
                subject
            );
        }
    }

    let catalog = ResourceCatalog::load_or_empty(&resources);
    println!(
        "\nResource catalog: {} guides, {} tools",
        catalog.guides.len(),
        catalog.tools.len()
    );
    for guide in &catalog.guides {
        println!("  - {}: {}", guide.title, guide.summary);
    }
    for tool in &catalog.tools {
        println!("  - {} -> {}", tool.name, tool.link);
    }

    Ok(())
}

fn render_verdict(verdict: &Verdict) {
    println!("Risk: {} (score {:.2})", verdict.risk.label(), verdict.score);
    if verdict.signals.is_empty() {
        println!("Signals: none");
    } else {
        println!("Signals:");
        for signal in &verdict.signals {
            println!("  - {} (+{:.2})", signal.label, signal.weight);
        }
    }
    println!("Recommended next steps:");
    for recommendation in &verdict.recommendations {
        println!("  - {}", recommendation);
    }
}

fn demo_requests() -> Vec<(&'static str, AssessmentRequest)> {
    vec![
        (
            "Claim with sensational framing and a weak host",
            AssessmentRequest::Content {
                text: Some("SHOCKING secret exposed by insiders!!!".to_string()),
                url: Some("http://rumor-mill.blogspot.com/2024/leak".to_string()),
            },
        ),
        (
            "Calm civic announcement from an authority domain",
            AssessmentRequest::Content {
                text: Some(
                    "The municipal water board begins hydrant flushing on Monday morning."
                        .to_string(),
                ),
                url: Some("https://citywater.gov/notices".to_string()),
            },
        ),
        (
            "Chain-message nudge without a source",
            AssessmentRequest::Content {
                text: Some("Forward this to everyone you know right now!!!".to_string()),
                url: None,
            },
        ),
        (
            "Link-only check of an unparseable address",
            AssessmentRequest::Link {
                url: Some("not a real address".to_string()),
            },
        ),
        (
            "Media upload awaiting provenance tooling",
            AssessmentRequest::Media {
                upload: Some(MediaUpload {
                    filename: "street-rally.mp4".to_string(),
                    size_bytes: 2_480_000,
                    declared_type: Some("video/mp4".to_string()),
                }),
            },
        ),
    ]
}

fn demo_reports() -> Vec<ReportSubmission> {
    let mut submissions = vec![
        ReportSubmission {
            text: Some("Miracle cure claim spreading in family groups".to_string()),
            url: None,
            notes: Some("No named doctor, no institution".to_string()),
            contact: None,
        },
        ReportSubmission {
            text: None,
            url: Some("http://breaking-truth.blogspot.com/flood-video".to_string()),
            notes: Some("Old footage presented as current".to_string()),
            contact: Some("reader@example.com".to_string()),
        },
        ReportSubmission {
            text: Some("Forward this before it gets deleted!!!".to_string()),
            url: None,
            notes: None,
            contact: None,
        },
    ];

    for sighting in 1..=9 {
        submissions.push(ReportSubmission {
            url: Some(format!("https://medium.com/@anon/claim-{sighting}")),
            notes: Some(format!("Duplicate sighting #{sighting}")),
            ..ReportSubmission::default()
        });
    }

    submissions
}
