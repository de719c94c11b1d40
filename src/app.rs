use crossbeam::channel::{unbounded, Receiver, TryRecvError};
use eframe::CreationContext;
use egui::{Align, Align2, CentralPanel, Context, OpenUrl, RichText, ScrollArea, Vec2};
use log::warn;
use tokio::task::JoinHandle;

use crate::background::ParticleField;
use crate::carousel::CarouselState;
use crate::config::{Sources, RESUME_DOWNLOADED_AT_KEY};
use crate::content::{ContentBundle, ContentRetriever, Post, Project};
use crate::filter::CategoryFilter;
use crate::skills::{self, Radar, TreeDiagram};
use crate::state::Phase;
use crate::status::NoticeBoard;
use crate::views::{self, blog, contact::ContactForm, gallery, highlights, modal::ProjectModal};
use crate::views::{
    nav::{NavMenu, Section},
    resume, style,
};

/// The whole page. Event wiring and the background simulation start
/// immediately; content arrives asynchronously and the dependent
/// sections fill in once it does.
pub struct PortfolioApp {
    sources: Sources,
    phase: Phase,
    content_rx: Option<(Receiver<ContentBundle>, JoinHandle<()>)>,

    projects: Vec<Project>,
    posts: Vec<Post>,

    filter: CategoryFilter,
    carousel: CarouselState,
    modal: ProjectModal,
    nav: NavMenu,
    pending_scroll: Option<Section>,
    contact: ContactForm,

    field: Option<ParticleField>,
    tree: TreeDiagram,
    notices: NoticeBoard,
    resume_marker: Option<String>,
}

impl PortfolioApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        style::apply(&cc.egui_ctx);

        let sources = Sources::default();
        let (tx, rx) = unbounded();
        let handle = ContentRetriever::new(tx).run(sources.clone());

        Self {
            sources,
            phase: Phase::default(),
            content_rx: Some((rx, handle)),
            projects: Vec::new(),
            posts: Vec::new(),
            filter: CategoryFilter::default(),
            carousel: CarouselState::default(),
            modal: ProjectModal::default(),
            nav: NavMenu::default(),
            pending_scroll: None,
            contact: ContactForm::default(),
            field: None,
            tree: TreeDiagram::new(&skills::SKILL_TREE),
            notices: NoticeBoard::new(),
            resume_marker: None,
        }
    }

    /// Check the retriever channel once per frame until content lands.
    fn poll_content(&mut self) {
        let Some((rx, handle)) = &self.content_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(bundle) => self.apply_bundle(bundle),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                if handle.is_finished() {
                    warn!("content retriever died; swapping in bundled samples");
                    self.apply_bundle(ContentBundle::fallback());
                }
            }
        }
    }

    fn apply_bundle(&mut self, bundle: ContentBundle) {
        let live = bundle.projects_live && bundle.posts_live;
        if !bundle.projects_live {
            self.notices
                .push_fallback("Showing bundled sample projects.");
        }
        self.projects = bundle.projects;
        self.posts = bundle.posts;
        self.phase.resolve(live);
        self.content_rx = None;
    }

    fn show_background(&mut self, ctx: &Context) {
        let mut rng = rand::rng();
        let field = self.field.get_or_insert_with(|| {
            ParticleField::new(
                ctx.screen_rect().size(),
                ctx.pixels_per_point(),
                &mut rng,
            )
        });
        field.show(ctx, &mut rng);
    }

    fn show_notices(&mut self, ctx: &Context) {
        self.notices.sweep();
        if self.notices.is_empty() {
            return;
        }
        let queued = self.notices.len() - 1;
        let Some(notice) = self.notices.latest() else {
            return;
        };
        egui::Area::new(egui::Id::new("notices"))
            .anchor(Align2::LEFT_BOTTOM, Vec2::new(12.0, -12.0))
            .show(ctx, |ui| {
                style::card_frame().show(ui, |ui| {
                    ui.label(RichText::new(&notice.text).color(style::COLOR_SUBTLE));
                    if queued > 0 {
                        ui.label(
                            RichText::new(format!("+{queued} more"))
                                .size(11.0)
                                .color(style::COLOR_MUTED),
                        );
                    }
                });
            });
    }
}

fn anchor(response: &egui::Response, section: Section, pending: Option<Section>) {
    if pending == Some(section) {
        response.scroll_to_me(Some(Align::Min));
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        self.poll_content();
        self.show_background(ctx);

        if let Some(section) = self.nav.show(ctx) {
            self.pending_scroll = Some(section);
        }
        let pending = self.pending_scroll.take();

        CentralPanel::default()
            .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(24, 0)))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    // Home / hero
                    let r = views::reveal(ui, "home", |ui| {
                        ui.add_space(32.0);
                        let r = ui.label(
                            RichText::new("Data, AI & Greener Growing")
                                .size(32.0)
                                .strong()
                                .color(style::COLOR_TEXT),
                        );
                        ui.label(
                            RichText::new(
                                "Analytics and machine learning for horticulture and beyond.",
                            )
                            .color(style::COLOR_MUTED),
                        );
                        r
                    });
                    anchor(&r, Section::Home, pending);

                    // Highlights carousel
                    let r = views::section_heading(ui, "Highlights");
                    anchor(&r, Section::Highlights, pending);
                    views::reveal(ui, "highlights", |ui| {
                        if self.phase.is_ready() {
                            highlights::show(ui, &self.projects, &mut self.carousel);
                        } else {
                            ui.spinner();
                        }
                    });

                    // Portfolio grid
                    let r = views::section_heading(ui, "Portfolio");
                    anchor(&r, Section::Portfolio, pending);
                    views::reveal(ui, "portfolio", |ui| {
                        if self.phase.is_ready() {
                            if let Some(id) =
                                gallery::show(ui, &self.projects, &mut self.filter)
                            {
                                self.modal.open(id);
                            }
                        } else {
                            ui.spinner();
                        }
                    });

                    // Skills: radar + tree, static data
                    let r = views::section_heading(ui, "Skills");
                    anchor(&r, Section::Skills, pending);
                    views::reveal(ui, "skills", |ui| {
                        ui.horizontal_wrapped(|ui| {
                            Radar::new(&skills::RATINGS).show(ui);
                            self.tree.show(ui);
                        });
                    });

                    // Blog
                    let r = views::section_heading(ui, "Blog");
                    anchor(&r, Section::Blog, pending);
                    views::reveal(ui, "blog", |ui| {
                        if self.phase.is_ready() {
                            blog::show(ui, &self.posts);
                        } else {
                            ui.spinner();
                        }
                    });

                    // Résumé excerpt + download tracking
                    let r = views::section_heading(ui, "Résumé");
                    anchor(&r, Section::Resume, pending);
                    views::reveal(ui, "resume", |ui| {
                        if let Some(ts) = resume::show(ui, &self.projects, &self.sources) {
                            self.resume_marker = Some(ts);
                            self.notices.push_info("Opening résumé…");
                        }
                    });

                    // Contact
                    let r = views::section_heading(ui, "Contact");
                    anchor(&r, Section::Contact, pending);
                    views::reveal(ui, "contact", |ui| {
                        if let Some(uri) = self.contact.show(ui, &self.sources.contact_email) {
                            ui.ctx().open_url(OpenUrl::same_tab(uri));
                            self.notices.push_info("Opening your mail client…");
                        }
                    });

                    ui.add_space(32.0);
                    ui.separator();
                    ui.label(
                        RichText::new(format!(
                            "© {} — all data stays on your machine",
                            chrono::Local::now().format("%Y")
                        ))
                        .size(11.0)
                        .color(style::COLOR_MUTED),
                    );
                    ui.add_space(16.0);
                });
            });

        self.modal.show(ctx, &self.projects);
        self.show_notices(ctx);

        // Best-effort download marker; a missing store just drops it.
        if let Some(ts) = self.resume_marker.take() {
            if let Some(storage) = frame.storage_mut() {
                storage.set_string(RESUME_DOWNLOADED_AT_KEY, ts);
                storage.flush();
            }
        }
    }
}
