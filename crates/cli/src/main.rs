use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use trajplot::{plot, Bounds2, CanvasCfg, Style};

mod load;
mod provenance;
mod style_file;

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Plot a two-class point sequence as a path with colored markers (PNG)")]
struct Cmd {
    /// Headerless CSV with rows `x,y,category`; category `a` (any case) is class A
    input: String,

    /// Output image path
    #[arg(long, default_value = "prot.png")]
    out: String,

    /// Logical canvas width
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Logical canvas height
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Supersampling factor; the image is `width*supersample × height*supersample`
    #[arg(long, default_value_t = 4)]
    supersample: u32,

    /// JSON file with style overrides (ball_radius, line_width, *_color, background)
    #[arg(long)]
    style: Option<String>,

    /// Also write `<out stem>.provenance.json` next to the image
    #[arg(long)]
    provenance: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    run(&cmd)
}

fn run(cmd: &Cmd) -> Result<()> {
    tracing::info!(input = cmd.input, out = cmd.out, "plot");
    let style = match &cmd.style {
        Some(path) => style_file::load_style(Path::new(path))?,
        None => Style::default(),
    };
    let cfg = CanvasCfg {
        width: cmd.width,
        height: cmd.height,
        supersample: cmd.supersample,
    };
    cfg.validate().context("canvas configuration")?;

    let points = load::load_csv(Path::new(&cmd.input))?;
    tracing::info!(points = points.len(), "loaded");

    let canvas = plot(&points, cfg, &style).with_context(|| format!("plotting {}", cmd.input))?;
    // Encode fully before touching the output path.
    let png = canvas.export_png()?;

    let out_path = Path::new(&cmd.out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, &png).with_context(|| format!("writing {}", cmd.out))?;
    let (w, h) = canvas.physical_size();
    tracing::info!(
        out = cmd.out,
        width = w,
        height = h,
        bytes = png.len(),
        "wrote"
    );

    if cmd.provenance {
        let bounds = Bounds2::from_points(&points);
        let payload = provenance::Payload::new(serde_json::json!({
            "canvas": {
                "width": cfg.width,
                "height": cfg.height,
                "supersample": cfg.supersample
            },
            "style": {
                "ball_radius": style.ball_radius,
                "line_width": style.line_width,
                "line_color": rgb_json(style.line_color),
                "a_color": rgb_json(style.a_color),
                "b_color": rgb_json(style.b_color),
                "background": rgb_json(style.background)
            },
            "points": points.len(),
            "bounds": bounds.map(|b| [b.min.x, b.min.y, b.max.x, b.max.y])
        }))
        .with_input(cmd.input.clone());
        let sidecar = provenance::write_sidecar(out_path, payload)?;
        tracing::info!(sidecar = %sidecar.display(), "provenance");
    }
    Ok(())
}

fn rgb_json(c: trajplot::Rgb) -> [f32; 3] {
    [c.r, c.g, c.b]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn cmd(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_follow_the_fixed_output_name() {
        let c = cmd(&["points.csv"]);
        assert_eq!(c.out, "prot.png");
        assert_eq!((c.width, c.height, c.supersample), (600, 600, 4));
        assert!(c.style.is_none() && !c.provenance);
        assert!(Cmd::try_parse_from(["cli"]).is_err());
    }

    #[test]
    fn renders_exactly_one_png() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, "0,0,a\n10,0,b\n10,10,a\n").unwrap();
        let out = dir.path().join("nested").join("prot.png");
        let c = cmd(&[
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--width",
            "50",
            "--height",
            "40",
            "--supersample",
            "2",
        ]);
        run(&c).unwrap();
        let bytes = fs::read(&out).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let w = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        assert_eq!((w, h), (100, 80));
        assert_eq!(fs::read_dir(out.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn failures_leave_no_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("prot.png");
        for (name, contents) in [
            ("empty.csv", ""),
            ("single.csv", "3,3,a\n"),
            ("bad.csv", "0,0,a\nx,1,b\n"),
        ] {
            let input = dir.path().join(name);
            fs::write(&input, contents).unwrap();
            let c = cmd(&[input.to_str().unwrap(), "--out", out.to_str().unwrap()]);
            assert!(run(&c).is_err(), "{name} should fail");
            assert!(!out.exists(), "{name} left an output file");
        }
    }

    #[test]
    fn bad_canvas_size_fails_before_loading() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("prot.png");
        let missing = dir.path().join("missing.csv");
        for flag in ["--width", "--height", "--supersample"] {
            let c = cmd(&[
                missing.to_str().unwrap(),
                "--out",
                out.to_str().unwrap(),
                flag,
                "0",
            ]);
            let err = format!("{:#}", run(&c).unwrap_err());
            assert!(err.contains("canvas configuration"), "{flag}: {err}");
            assert!(!out.exists());
        }
    }

    #[test]
    fn style_file_and_provenance() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, "0,0,a\n5,0,b\n").unwrap();
        let style = dir.path().join("style.json");
        fs::write(&style, r#"{"ball_radius": 3, "b_color": [0, 1, 0]}"#).unwrap();
        let out = dir.path().join("walk.png");
        let c = cmd(&[
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--supersample",
            "1",
            "--style",
            style.to_str().unwrap(),
            "--provenance",
        ]);
        run(&c).unwrap();
        assert!(out.exists());
        let sidecar = dir.path().join("walk.provenance.json");
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["points"], 2);
        assert_eq!(doc["params"]["style"]["ball_radius"], 3.0);
        assert_eq!(doc["params"]["bounds"][2], 5.0);
    }
}
