//! Harmony generation command.

use crate::cli::common::{parse_color, print_json, save_failed, CliContext, CliError, CliResult};
use crate::models::{HarmonyKind, RgbColor};
use clap::Args;
use serde::Serialize;

/// Generate a color harmony
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color as #RRGGBB or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// complementary, analogous, triadic, tetradic or split; anything else yields the base alone
    #[arg(short, long, value_name = "KIND", default_value = "complementary")]
    pub kind: String,

    /// Save the harmony as a palette with this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HarmonyResponse<'a> {
    base: RgbColor,
    kind: &'static str,
    colors: &'a [RgbColor],
    #[serde(skip_serializing_if = "Option::is_none")]
    palette_id: Option<String>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let base = parse_color(&self.color)?;
        let kind = HarmonyKind::from(self.kind.as_str());

        let mut session = ctx.session();
        session.preview_color(base);
        session.harmony = kind;
        let colors = session.harmony_colors();

        let palette_id = match &self.save {
            Some(name) => {
                let id = session
                    .save_harmony_as_palette(name)
                    .map_err(|e| CliError::validation(e.to_string()))?
                    .id
                    .clone();
                session
                    .save_palettes(&mut ctx.store())
                    .map_err(save_failed("palettes"))?;
                Some(id)
            }
            None => None,
        };

        if self.json {
            return print_json(&HarmonyResponse {
                base,
                kind: kind.as_str(),
                colors: &colors,
                palette_id,
            });
        }

        for color in &colors {
            println!("{color}");
        }
        if let Some(id) = palette_id {
            eprintln!("Saved palette {id}");
        }
        Ok(())
    }
}
