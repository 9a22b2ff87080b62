use yew::prelude::*;

/// Site-wide stylesheet. Page specific tweaks live next to the markup.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <style>
            {r#"
                :root {
                    --navy: #0f1f3d;
                    --navy-light: #1c3158;
                    --crimson: #c8102e;
                    --steel: #78869c;
                    --paper: #f6f7f9;
                    --ink: #1b1f27;
                    --muted: #5b6474;
                }
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    color: var(--ink);
                    background: #fff;
                }
                a { color: inherit; text-decoration: none; }
                img { max-width: 100%; display: block; }
                section { padding: 5rem 1.5rem; }
                section > * { max-width: 1200px; margin-left: auto; margin-right: auto; }
                .dark { background: var(--navy); color: #fff; }
                .center { text-align: center; margin-top: 2.5rem; }

                .heading-section { font-size: 2.25rem; font-weight: 800; margin: 0 0 1rem; }
                .section-heading { margin-bottom: 3rem; }
                .section-heading.centered { text-align: center; }
                .section-heading.light { color: #fff; }
                .section-subtitle { color: var(--muted); font-size: 1.1rem; }
                .section-heading.light .section-subtitle { color: rgba(255, 255, 255, 0.7); }
                .heading-rule { display: inline-flex; align-items: center; gap: 0.5rem; }
                .rule-bar { width: 3rem; height: 2px; background: var(--crimson); }
                .rule-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--crimson); }
                .eyebrow {
                    color: var(--crimson);
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                }

                .reveal { opacity: 0; transition: opacity 0.6s ease, transform 0.6s ease; }
                .reveal-up { transform: translateY(30px); }
                .reveal-left { transform: translateX(-30px); }
                .reveal-right { transform: translateX(30px); }
                .reveal-scale { transform: scale(0.95); }
                .reveal.visible { opacity: 1; transform: none; }

                .cta-primary, .cta-accent, .cta-outline, .cta-light {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.85rem 1.75rem;
                    font-weight: 700;
                    border: 2px solid transparent;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .cta-primary { background: var(--navy); color: #fff; }
                .cta-accent { background: var(--crimson); color: #fff; }
                .cta-outline { border-color: var(--navy); color: var(--navy); background: transparent; }
                .cta-outline.light { border-color: #fff; color: #fff; }
                .cta-light { background: #fff; color: var(--navy); }
                .cta-primary:hover, .cta-accent:hover { transform: translateY(-2px); }
                .full-width { width: 100%; justify-content: center; }
                .button-row { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }

                .card { background: #fff; border: 1px solid #e3e6eb; padding: 1.75rem; }
                .features-grid, .values-grid, .course-grid, .testimonial-grid,
                .team-grid, .review-grid, .blog-grid, .specialized-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .feature-icon {
                    display: inline-flex;
                    width: 3.5rem;
                    height: 3.5rem;
                    align-items: center;
                    justify-content: center;
                    background: var(--crimson);
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled { background: var(--navy); box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25); }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                    color: #fff;
                }
                .brand { display: flex; align-items: center; gap: 0.75rem; }
                .brand-mark {
                    width: 2.75rem;
                    height: 2.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--crimson);
                    font-weight: 900;
                    font-size: 1.4rem;
                }
                .brand-text { display: flex; flex-direction: column; line-height: 1.1; }
                .brand-name { font-weight: 900; letter-spacing: 0.05em; }
                .brand-tagline { font-size: 0.75rem; opacity: 0.8; }
                .desktop-nav { display: flex; gap: 0.25rem; }
                .nav-item { position: relative; }
                .nav-link { padding: 0.5rem 0.85rem; font-weight: 600; display: inline-block; }
                .nav-link.active { color: var(--crimson); }
                .nav-submenu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    min-width: 220px;
                    background: #fff;
                    color: var(--ink);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                }
                .nav-submenu-link { display: block; padding: 0.75rem 1rem; }
                .nav-submenu-link:hover { background: var(--paper); color: var(--crimson); }
                .header-cta { display: flex; gap: 0.75rem; align-items: center; }
                .header-whatsapp { background: var(--crimson); padding: 0.5rem 1rem; font-weight: 700; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                .mobile-menu { background: var(--navy); color: #fff; padding: 1rem 1.5rem; }
                .mobile-nav-link, .mobile-submenu-link, .mobile-call { display: block; padding: 0.75rem 0; }
                .mobile-submenu { padding-left: 1rem; opacity: 0.85; }

                .home-hero, .page-hero {
                    position: relative;
                    min-height: 60vh;
                    display: flex;
                    align-items: center;
                    background: var(--navy);
                    color: #fff;
                    padding-top: 8rem;
                    overflow: hidden;
                }
                .home-hero { min-height: 100vh; }
                .hero-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(15, 31, 61, 0.95), rgba(15, 31, 61, 0.5));
                }
                .hero-content { position: relative; z-index: 1; width: 100%; }
                .hero-content h1 { font-size: 3.5rem; font-weight: 900; margin: 1rem 0; }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: var(--crimson);
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.8rem;
                }
                .accent { color: var(--crimson); }
                .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
                .hero-quick-info { display: flex; gap: 2rem; margin-top: 2rem; opacity: 0.8; }

                .stats-band { background: var(--crimson); color: #fff; padding: 3rem 1.5rem; }
                .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); text-align: center; }
                .stat-value { font-size: 2.5rem; font-weight: 900; }
                .stat-label { text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.8rem; }

                .check-list, .curriculum-list, .scenario-list { list-style: none; padding: 0; }
                .check-list li, .curriculum-list li, .scenario-list li { display: flex; gap: 0.5rem; padding: 0.35rem 0; }
                .step-number {
                    flex-shrink: 0;
                    width: 1.75rem;
                    height: 1.75rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--navy);
                    color: #fff;
                    font-weight: 700;
                }

                .course-list { display: flex; flex-direction: column; gap: 1.5rem; }
                .course-card { padding: 0; }
                .course-header { display: flex; cursor: pointer; }
                .course-thumb { position: relative; width: 280px; flex-shrink: 0; }
                .course-summary { display: flex; flex: 1; justify-content: space-between; padding: 1.75rem; gap: 1rem; }
                .course-badge { background: var(--crimson); color: #fff; padding: 0.2rem 0.6rem; font-size: 0.75rem; }
                .price { font-size: 1.75rem; font-weight: 900; color: var(--crimson); }
                .original-price { text-decoration: line-through; color: var(--muted); margin-left: 0.5rem; }
                .toggle-icon { transition: transform 0.3s ease; display: inline-block; }
                .open .toggle-icon { transform: rotate(180deg); }
                .course-details { border-top: 1px solid #e3e6eb; padding: 1.75rem; }
                .course-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                .course-actions { display: flex; gap: 1rem; margin-top: 1.5rem; }

                .faq-search { padding: 2rem 1.5rem; background: var(--paper); }
                .search-box { display: flex; align-items: center; gap: 0.75rem; max-width: 640px; background: #fff; border: 1px solid #e3e6eb; padding: 0 1rem; }
                .search-box input { flex: 1; border: none; padding: 1rem 0; font-size: 1rem; outline: none; }
                .category-tabs { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin-bottom: 2rem; }
                .category-tab {
                    padding: 0.6rem 1.25rem;
                    border: 1px solid #e3e6eb;
                    background: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .category-tab.active { background: var(--navy); color: #fff; border-color: var(--navy); }
                .faq-list { max-width: 820px; display: flex; flex-direction: column; gap: 0.75rem; }
                .faq-item { border: 1px solid #e3e6eb; }
                .faq-item.open { border-color: var(--crimson); }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer { padding: 0 1.25rem 1.25rem; color: var(--muted); }
                .empty-state { text-align: center; color: var(--muted); padding: 3rem 0; }
                .ask-question { text-align: center; margin-top: 3rem; }

                .gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
                .gallery-tile { position: relative; aspect-ratio: 1; overflow: hidden; cursor: pointer; }
                .gallery-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.4s ease; }
                .gallery-tile:hover img { transform: scale(1.08); }
                .gallery-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(15, 31, 61, 0.5);
                    color: #fff;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-tile:hover .gallery-overlay { opacity: 1; }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.9);
                    padding: 2rem;
                }
                .lightbox img { max-height: 85vh; }
                .lightbox-close { position: absolute; top: 1.5rem; right: 1.5rem; background: none; border: none; color: #fff; cursor: pointer; }

                .stars { display: flex; gap: 0.2rem; color: #d0d4db; }
                .star-icon.filled { color: #f5b301; }
                .avatar {
                    width: 2.75rem;
                    height: 2.75rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: var(--crimson);
                    color: #fff;
                    font-weight: 700;
                }
                .owner-response { margin-top: 1rem; padding: 1rem; background: var(--paper); border-left: 3px solid var(--navy); }

                .timeline { display: flex; flex-direction: column; gap: 2rem; }
                .milestone { display: flex; gap: 1.5rem; align-items: center; }
                .milestone.flipped { flex-direction: row-reverse; text-align: right; }
                .milestone-year { font-size: 2rem; font-weight: 900; color: var(--crimson); }
                .amenities-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; }
                .amenity { display: flex; gap: 0.75rem; align-items: center; padding: 1rem; background: var(--paper); }

                .stages { display: flex; flex-direction: column; gap: 1.25rem; }
                .stage { display: flex; gap: 1.25rem; }
                .stage-header { display: flex; justify-content: space-between; gap: 1rem; }
                .stage-duration { color: var(--crimson); font-weight: 700; }
                .package-section, .scenarios-section, .legacy-section, .home-about, .contact-section, .map-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }

                .form-group { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.25rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .form-group input, .form-group select, .form-group textarea {
                    padding: 0.85rem 1rem;
                    border: 1px solid #d0d4db;
                    font: inherit;
                }
                .form-group input:focus, .form-group select:focus, .form-group textarea:focus { border-color: var(--crimson); outline: none; }
                .form-error { color: var(--crimson); font-weight: 600; }
                .contact-row { display: flex; gap: 1rem; margin-bottom: 1.25rem; }
                .map-frame { min-height: 300px; margin-top: 1.5rem; }
                .popular-times { max-width: 640px; }
                .popular-times-legend { display: flex; justify-content: space-between; list-style: none; padding: 0; font-size: 0.8rem; }
                .popular-times-note { color: var(--muted); font-style: italic; }

                .cta-band { background: var(--crimson); color: #fff; text-align: center; }
                .cta-band .button-row { justify-content: center; }

                .site-footer { background: var(--navy); color: rgba(255, 255, 255, 0.8); padding: 4rem 1.5rem 2rem; }
                .footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr 2fr; gap: 2rem; }
                .footer-grid h4 { color: #fff; letter-spacing: 0.1em; }
                .footer-grid ul { list-style: none; padding: 0; }
                .footer-grid li { padding: 0.3rem 0; }
                .footer-link:hover { color: var(--crimson); }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    justify-content: space-between;
                }
                .footer-bottom-links { display: flex; gap: 0.75rem; }
                .floating-whatsapp {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #25d366;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    z-index: 40;
                }

                .not-found-page { min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding-top: 6rem; }
                .not-found-page h1 { font-size: 5rem; margin: 0; color: var(--crimson); }

                @media (max-width: 900px) {
                    .desktop-nav, .header-cta { display: none; }
                    .burger-menu { display: block; }
                    .hero-content h1 { font-size: 2.5rem; }
                    .package-section, .scenarios-section, .legacy-section, .home-about,
                    .contact-section, .map-grid, .course-columns, .form-row, .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .course-header, .course-summary { flex-direction: column; }
                    .course-thumb { width: 100%; }
                    .milestone.flipped { flex-direction: row; text-align: left; }
                    .footer-bottom { flex-direction: column; gap: 1rem; }
                }
            "#}
        </style>
    }
}
