use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints};

use surfacing_sim::vehicle::{AscentParams, ThrustParams};
use surfacing_sim::{ModelKind, Run, Scenario, SimConfig, SurfacingPolicy};

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Submarine Surfacing Model",
        options,
        Box::new(|_| Ok(Box::new(SurfacingViz::default()))),
    )
}

struct Plotted {
    title: &'static str,
    run: Run,
}

struct SurfacingViz {
    model: ModelKind,
    ascent: AscentParams,
    thrusted: ThrustParams,
    sim: SimConfig,
    plotted: Option<Plotted>,
    error: Option<String>,
}

impl Default for SurfacingViz {
    fn default() -> Self {
        Self {
            model: ModelKind::Ascent,
            ascent: AscentParams::default(),
            thrusted: ThrustParams::default(),
            sim: SimConfig::default(),
            plotted: None,
            error: None,
        }
    }
}

impl SurfacingViz {
    fn scenario(&self) -> Scenario {
        match self.model {
            ModelKind::Ascent => Scenario::Ascent {
                simulation: self.sim.clone(),
                params: self.ascent.clone(),
            },
            ModelKind::Thrusted => Scenario::Thrusted {
                simulation: self.sim.clone(),
                params: self.thrusted.clone(),
            },
        }
    }

    /// Validate and run; a successful run replaces the previous plot.
    fn run(&mut self) {
        let scenario = self.scenario();
        match scenario.validate().and_then(|_| scenario.run()) {
            Ok(run) => {
                self.error = None;
                self.plotted = Some(Plotted { title: scenario.name(), run });
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.model, ModelKind::Ascent, "Buoyant");
            ui.radio_value(&mut self.model, ModelKind::Thrusted, "Thrust-assisted");
        });
        ui.separator();

        egui::Grid::new("params").num_columns(2).striped(true).show(ui, |ui| {
            match self.model {
                ModelKind::Ascent => {
                    let p = &mut self.ascent;
                    field(ui, "Water density (kg/m³)", &mut p.water_density, 1.0);
                    field(ui, "Hull density (kg/m³)", &mut p.hull_density, 1.0);
                    field(ui, "Volume (m³)", &mut p.volume, 0.1);
                    field(ui, "Initial depth (m)", &mut p.initial_depth, 0.5);
                    field(ui, "Viscosity (Pa·s)", &mut p.viscosity, 0.0001);
                    field(ui, "Drag coefficient", &mut p.drag_coeff, 0.01);
                    field(ui, "Depth coefficient", &mut p.depth_coeff, 0.01);
                    field(ui, "g (m/s²)", &mut p.gravity, 0.01);
                    field(ui, "Horizontal speed (m/s)", &mut p.horizontal_speed, 0.1);
                }
                ModelKind::Thrusted => {
                    let p = &mut self.thrusted;
                    field(ui, "Water density (kg/m³)", &mut p.water_density, 1.0);
                    field(ui, "Initial density (kg/m³)", &mut p.initial_density, 1.0);
                    field(ui, "Volume (m³)", &mut p.volume, 0.1);
                    field(ui, "Initial depth (m)", &mut p.initial_depth, 0.5);
                    field(ui, "Viscosity (Pa·s)", &mut p.viscosity, 0.0001);
                    field(ui, "Drag coefficient", &mut p.drag_coeff, 0.01);
                    field(ui, "Depth coefficient", &mut p.depth_coeff, 0.01);
                    field(ui, "g (m/s²)", &mut p.gravity, 0.01);
                    field(ui, "Ballast rate (kg/s)", &mut p.ballast_rate, 1.0);
                    field(ui, "Thrust (N)", &mut p.thrust, 100.0);
                    field(ui, "Thrust angle (deg)", &mut p.thrust_angle_deg, 1.0);
                }
            }
            field(ui, "Step (s)", &mut self.sim.dt, 0.001);
            field(ui, "Time bound (s)", &mut self.sim.max_time, 1.0);
        });

        let label = match self.sim.policy {
            None => "model default",
            Some(p) => p.label(),
        };
        egui::ComboBox::from_label("Surfacing check")
            .selected_text(label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.sim.policy, None, "model default");
                ui.selectable_value(&mut self.sim.policy, Some(SurfacingPolicy::PostCheck), "post-check");
                ui.selectable_value(&mut self.sim.policy, Some(SurfacingPolicy::PreCheck), "pre-check");
            });

        ui.add_space(12.0);
        if ui.button("Plot trajectory").clicked() {
            self.run();
        }
        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::RED, err.as_str());
        }
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut f64, speed: f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(speed).max_decimals(5));
    ui.end_row();
}

impl eframe::App for SurfacingViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("form").resizable(false).show(ctx, |ui| {
            ui.heading("Parameters");
            self.form(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(plotted) = &self.plotted else {
                ui.centered_and_justified(|ui| ui.label("Set parameters and press \"Plot trajectory\""));
                return;
            };

            let run = &plotted.run;
            ui.heading(format!("Surfacing trajectory — {}", plotted.title));
            ui.label(format!(
                "{}  |  Steps: {}  |  Policy: {}",
                run.status_message(),
                run.steps(),
                run.policy(),
            ));

            let step = (run.trajectory().len() / 2000).max(1);
            let mut points: Vec<[f64; 2]> =
                run.trajectory().iter().step_by(step).map(|s| [s.x, s.y]).collect();
            let last = run.last();
            if points.last() != Some(&[last.x, last.y]) {
                points.push([last.x, last.y]);
            }

            Plot::new("trajectory")
                .legend(Legend::default())
                .x_axis_label("Horizontal distance (m)")
                .y_axis_label("Depth (m)")
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new("Trajectory", PlotPoints::from(points))
                            .color(egui::Color32::from_rgb(0, 150, 0))
                            .width(2.5_f32),
                    );
                    plot_ui.hline(
                        HLine::new("Water surface", 0.0)
                            .color(egui::Color32::BLUE)
                            .style(LineStyle::dashed_loose())
                            .width(2.0_f32),
                    );
                });
        });
    }
}
