//! Pick a color from channel values, the way the picker's inputs and sliders do.

use crate::cli::common::{parse_color, print_json, save_failed, CliContext, CliError, CliResult};
use crate::models::{ColorInfo, RgbColor};
use clap::Args;
use serde::Serialize;

/// Select a color from hex, RGB or HSL values and record it in history
#[derive(Debug, Clone, Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["color", "rgb", "hsl", "sliders", "reset"])))]
pub struct PickArgs {
    /// Color as #RRGGBB or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: Option<String>,

    /// Red, green and blue inputs (0-255 each)
    #[arg(long, value_name = "R,G,B", value_delimiter = ',')]
    pub rgb: Option<Vec<i64>>,

    /// Hue (0-360), saturation and lightness (0-100) inputs
    #[arg(long, value_name = "H,S,L", value_delimiter = ',')]
    pub hsl: Option<Vec<i64>>,

    /// Hue, saturation, lightness and alpha slider positions
    #[arg(long, value_name = "H,S,L,A", value_delimiter = ',')]
    pub sliders: Option<Vec<u16>>,

    /// Reset the sliders to pure red at full opacity
    #[arg(long)]
    pub reset: bool,

    /// Also print every notation and the shade strip
    #[arg(long)]
    pub details: bool,

    /// Output the picked color as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PickResponse {
    value: String,
    hex: String,
    swatch: String,
    history_updated: bool,
    info: ColorInfo,
    preview: Vec<String>,
}

fn three(values: &[i64]) -> CliResult<[i64; 3]> {
    values
        .try_into()
        .map_err(|_| CliError::validation("Expected exactly three values"))
}

fn percent(value: u16) -> CliResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| CliError::validation(format!("Slider value {value} must be between 0 and 100")))
}

impl PickArgs {
    /// Execute the pick command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut session = ctx.session();
        let before = session.history().clone();

        if let Some(color) = &self.color {
            session.select_color(parse_color(color)?);
        } else if let Some(values) = &self.rgb {
            let color = session
                .set_from_rgb_inputs(three(values)?)
                .ok_or_else(|| CliError::validation("RGB values must be between 0 and 255"))?;
            session.select_color(color);
        } else if let Some(values) = &self.hsl {
            let color = session.set_from_hsl_inputs(three(values)?).ok_or_else(|| {
                CliError::validation("Hue must be 0-360; saturation and lightness 0-100")
            })?;
            session.select_color(color);
        } else if let Some(values) = &self.sliders {
            let [h, s, l, a]: [u16; 4] = values
                .as_slice()
                .try_into()
                .map_err(|_| CliError::validation("Expected exactly four slider values"))?;
            if h > 360 {
                return Err(CliError::validation("Hue slider must be between 0 and 360"));
            }
            session.apply_sliders(h, percent(s)?, percent(l)?, percent(a)?);
        } else {
            session.reset_sliders();
        }

        let history_updated = *session.history() != before;
        if history_updated {
            session
                .save_history(&mut ctx.store())
                .map_err(save_failed("color history"))?;
        }

        let response = PickResponse {
            value: session.display_value(),
            hex: session.current.to_hex(),
            swatch: session.swatch_rgba(),
            history_updated,
            info: session.color_info(),
            preview: session.preview().iter().map(RgbColor::to_hex).collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("{}", response.value);
        if session.alpha < 1.0 {
            println!("{}", response.swatch);
        }
        if self.details {
            println!();
            println!("{}", response.info.name);
            for (label, value) in response.info.rows() {
                println!("  {label:<5} {value}");
            }
            println!("  Shades {}", response.preview.join(" "));
        }
        Ok(())
    }
}
