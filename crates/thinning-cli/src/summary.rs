use std::path::Path;

use console::Style;
use thinning_core::analysis::TopologySummary;
use thinning_core::config::ThinningConfig;
use thinning_core::thinning::ThinningReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warning: Style::new().yellow().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_thinning_summary(
    input: &Path,
    output: &Path,
    config: &ThinningConfig,
    report: &ThinningReport,
    before: &TopologySummary,
    after: &TopologySummary,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Thinning"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Algorithm"),
        s.method.apply_to(config.algorithm)
    );
    let polarity = if config.invert { "dark" } else { "bright" };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Foreground"),
        s.value
            .apply_to(format!("{polarity} (threshold {})", config.threshold))
    );
    println!();

    println!("  {}", s.header.apply_to("Convergence"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Passes"),
        s.value.apply_to(report.passes)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Removed"),
        s.value.apply_to(report.removed)
    );
    println!();

    println!("  {}", s.header.apply_to("Topology"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pixels"),
        s.value
            .apply_to(format!("{} \u{2192} {}", before.foreground, after.foreground))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Components"),
        s.value
            .apply_to(format!("{} \u{2192} {}", before.components, after.components))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Holes"),
        s.value
            .apply_to(format!("{} \u{2192} {}", before.holes, after.holes))
    );
    if !before.same_topology(after) {
        println!(
            "    {}",
            s.warning
                .apply_to("topology changed (2-pixel-thick features can vanish)")
        );
    }
    println!();
}
