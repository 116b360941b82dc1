use anyhow::{Context as _, Result};
use clap::Parser;
use crossbeam_channel::{unbounded, Receiver};
use eframe::egui;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use tsod_chat_header::config::Config;
use tsod_chat_header::ui::{theme, ButtonKind, Catalog, ChatHeader, HeaderEvent, Mode};

/// Stand-in for the host's call session: owns the header and reacts to
/// its events the way a conversation view would.
struct DemoApp {
    header: ChatHeader,
    rx_event: Receiver<HeaderEvent>,

    online: bool,
    audio_active: bool,
    video_active: bool,
    mic_muted: bool,
    vol_muted: bool,
    log: Vec<String>,
}

impl DemoApp {
    fn new(cfg: &Config) -> Result<Self> {
        let (tx_event, rx_event) = unbounded();
        let mut header = ChatHeader::new(tx_event);
        header.set_name(&cfg.name);
        header.set_mode(Mode::from(cfg.mode));

        if let Some(path) = cfg.catalog.as_deref() {
            header.retranslate(Catalog::load(path)?);
            info!("catalog loaded from {}", path.display());
        }

        if let Some(path) = cfg.avatar.as_deref() {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading avatar {}", path.display()))?;
            if let Err(e) = header.set_avatar_bytes(&bytes) {
                warn!("avatar {} not shown: {}", path.display(), e);
            }
        }

        header.add_widget(|ui| {
            ui.label(
                egui::RichText::new("peer-to-peer")
                    .small()
                    .color(theme::COLOR_TEXT_MUTED),
            );
        });

        let mut app = Self {
            header,
            rx_event,
            online: true,
            audio_active: false,
            video_active: false,
            mic_muted: false,
            vol_muted: false,
            log: Vec::new(),
        };
        app.sync_header();
        Ok(app)
    }

    fn in_call(&self) -> bool {
        self.audio_active || self.video_active
    }

    fn sync_header(&mut self) {
        let in_call = self.in_call();
        self.header
            .update_call_buttons(self.online, self.audio_active, self.video_active);
        self.header.update_mute_mic_button(in_call, self.mic_muted);
        self.header.update_mute_vol_button(in_call, self.vol_muted);
    }

    fn handle_event(&mut self, event: HeaderEvent) {
        info!(?event, "header event");
        self.log.push(format!("{event:?}"));

        match event {
            HeaderEvent::NameChanged(_) => {}
            HeaderEvent::CallTriggered | HeaderEvent::VideoCallTriggered => {
                let video = event == HeaderEvent::VideoCallTriggered;
                if self.in_call() {
                    self.audio_active = false;
                    self.video_active = false;
                    self.sync_header();
                } else {
                    self.header.show_outgoing_call(video);
                }
            }
            HeaderEvent::MicMuteToggle => {
                self.mic_muted = !self.mic_muted;
                self.sync_header();
            }
            HeaderEvent::VolMuteToggle => {
                self.vol_muted = !self.vol_muted;
                self.sync_header();
            }
            HeaderEvent::CallAccepted => {
                let video = self.header.call_confirm_anchor() == Some(ButtonKind::Video);
                self.header.remove_call_confirm();
                self.audio_active = !video;
                self.video_active = video;
                self.sync_header();
            }
            HeaderEvent::CallRejected => {
                self.header.remove_call_confirm();
                self.sync_header();
            }
        }
    }

    fn show_session_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Session");
        ui.separator();

        let mut changed = ui.checkbox(&mut self.online, "Peer online").changed();
        changed |= ui.checkbox(&mut self.audio_active, "Audio call active").changed();
        changed |= ui.checkbox(&mut self.video_active, "Video call active").changed();
        if changed {
            self.sync_header();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Incoming audio").clicked() {
                self.header.show_incoming_call(false);
                self.header.show_call_confirm(false);
            }
            if ui.button("Incoming video").clicked() {
                self.header.show_incoming_call(true);
                self.header.show_call_confirm(true);
            }
        });

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Events").strong());
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &self.log {
                    ui.label(egui::RichText::new(line).small().color(theme::COLOR_TEXT_DIM));
                }
            });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.rx_event.try_recv() {
            self.handle_event(event);
        }

        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.header.show(ui);
            ui.add_space(4.0);
        });

        egui::SidePanel::right("session_controls")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| self.show_session_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No messages yet.")
                        .color(theme::COLOR_TEXT_MUTED)
                        .italics(),
                );
            });
        });
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cfg = Config::parse();
    let app = DemoApp::new(&cfg)?;
    info!("starting header demo for {}", cfg.name);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_min_inner_size([480.0, 240.0])
            .with_title("Chat header"),
        ..Default::default()
    };

    eframe::run_native(
        "chat-header-demo",
        native_options,
        Box::new(move |cc| {
            theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
