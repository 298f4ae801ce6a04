/// Inline stylesheet for every page.
pub const SITE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; color: #111827; background: #f9fafb; }
a { color: inherit; text-decoration: none; }
.site-header { position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,0.92); border-bottom: 1px solid #e5e7eb; }
.site-nav { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.site-brand { font-size: 1.25rem; font-weight: 700; display: flex; align-items: center; gap: 0.5rem; }
.site-mark { width: 2rem; height: 2rem; border-radius: 9999px; background: linear-gradient(90deg, #d4af37, #c0c0c0); color: white; font-size: 0.8rem; display: inline-flex; align-items: center; justify-content: center; }
.site-links { display: flex; gap: 2rem; color: #374151; }
.site-links a:hover { color: #111827; }
.site-main { min-height: 70vh; }
.site-footer { background: #111827; color: white; padding: 3rem 1.5rem; margin-top: 4rem; }
.footer-grid { max-width: 1280px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
.footer-grid p, .footer-grid a { color: #9ca3af; }
.footer-grid ul { list-style: none; padding: 0; }
.footer-name { font-size: 1.25rem; font-weight: 700; color: white !important; }
.footer-legal { text-align: center; color: #9ca3af; border-top: 1px solid #1f2937; margin-top: 2rem; padding-top: 2rem; }

/* Blocks */
.hero { min-height: 80vh; display: flex; align-items: center; justify-content: center; text-align: center; color: white; background: linear-gradient(rgba(0,0,0,0.45), rgba(0,0,0,0.45)), url("https://imgix.cosmicjs.com/1131cfa0-795a-11f0-a051-23c10f41277a-photo-1544636331-e26879cd4d9b-1755208818925.jpg?w=2000&h=1200&fit=crop&auto=format,compress") center/cover; }
.hero h1 { font-size: 4rem; margin: 0 0 1.5rem; }
.hero p { font-size: 1.5rem; opacity: 0.9; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }
.button { display: inline-block; padding: 0.75rem 2rem; border-radius: 0.5rem; font-weight: 600; }
.button--primary { background: #d4af37; color: white; }
.button--outline { border: 2px solid white; color: white; }
.button--light { background: white; color: #4f46e5; }
.page-intro, .section-heading { text-align: center; max-width: 48rem; margin: 3rem auto; padding: 0 1rem; }
.page-intro h1 { font-size: 2.5rem; margin-bottom: 1rem; }
.page-intro p, .section-heading p { font-size: 1.25rem; color: #4b5563; }
.home-section { padding: 4rem 1.5rem; }
.home-section--alt { background: #f3f4f6; }
.section-more { text-align: center; margin-top: 3rem; }
.breadcrumb { max-width: 1280px; margin: 2rem auto 1rem; padding: 0 1.5rem; font-size: 0.875rem; color: #4b5563; }
.breadcrumb ol { list-style: none; display: flex; gap: 0.5rem; padding: 0; margin: 0; }
.breadcrumb-current { color: #111827; }
.empty-state { text-align: center; padding: 4rem 1rem; color: #6b7280; }
.not-found { text-align: center; padding: 6rem 1rem; }
.panel { background: white; border-radius: 0.75rem; box-shadow: 0 10px 15px rgba(0,0,0,0.08); padding: 1.5rem; margin-bottom: 1.5rem; }
.label { font-weight: 600; color: #374151; }
.prose { line-height: 1.7; color: #374151; }

/* Cards */
.card-grid { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 2rem; }
.car-card, .brand-card, .dealership-card { display: block; background: white; border-radius: 0.75rem; overflow: hidden; box-shadow: 0 10px 15px rgba(0,0,0,0.08); transition: transform 0.2s; }
.car-card:hover, .brand-card:hover { transform: translateY(-4px); }
.card-media { position: relative; display: block; height: 16rem; overflow: hidden; }
.card-image, .banner-image, .gallery-main, .gallery-thumb { width: 100%; height: 100%; object-fit: cover; }
.image-placeholder { background: #e5e7eb; color: #9ca3af; display: flex; align-items: center; justify-content: center; min-height: 12rem; }
.card-badges { position: absolute; top: 1rem; left: 1rem; right: 1rem; display: flex; justify-content: space-between; }
.card-body { padding: 1.5rem; }
.card-meta, .card-price-row { display: flex; justify-content: space-between; align-items: center; color: #6b7280; font-size: 0.875rem; }
.card-title { font-size: 1.25rem; margin: 0.5rem 0; }
.car-price, .car-summary-price { font-size: 1.5rem; font-weight: 700; color: #d4af37; }
.car-stats { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; font-size: 0.875rem; margin-top: 1rem; }
.stat-label { color: #6b7280; }
.stat-value { font-weight: 600; }
.brand-card { padding: 2rem; text-align: center; }
.brand-logo { width: 6rem; height: 6rem; margin: 0 auto 1.5rem; object-fit: contain; }
.brand-logo--initial { border-radius: 9999px; background: #e5e7eb; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; font-weight: 700; color: #9ca3af; }
.brand-facts { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; color: #6b7280; font-size: 0.875rem; margin-bottom: 1rem; }
.brand-excerpt { color: #4b5563; font-size: 0.875rem; line-height: 1.6; }
.address, .hours p { white-space: normal; }

/* Badges */
.badge { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.8rem; font-weight: 600; }
.badge--new { background: #dcfce7; color: #166534; }
.badge--certified { background: #dbeafe; color: #1e40af; }
.badge--neutral { background: #f3f4f6; color: #1f2937; }
.badge--available { background: #d4af37; color: white; }
.badge--sold { background: #fee2e2; color: #991b1b; }
.badge--brand { background: #d4af37; color: white; margin: 0 0.25rem 0.25rem 0; }

/* Details */
.car-summary, .brand-header, .dealership-header, .car-overview, .inventory, .related { max-width: 1280px; margin: 0 auto 2rem; padding: 0 1.5rem; }
.car-summary { display: flex; justify-content: space-between; align-items: center; }
.car-summary h1 { font-size: 2.5rem; margin: 0 0 0.5rem; }
.car-summary-meta { display: flex; gap: 1rem; align-items: center; }
.car-brand-link { color: #4f46e5; font-weight: 600; }
.car-overview { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
.gallery { margin-bottom: 1.5rem; }
.gallery-main { border-radius: 0.75rem; }
.gallery-thumbs { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-top: 1rem; }
.gallery-thumb { border-radius: 0.5rem; height: 6rem; }
.car-specs dl { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.spec { border-bottom: 1px solid #e5e7eb; padding-bottom: 0.5rem; }
.spec dt { font-size: 0.875rem; color: #4b5563; }
.spec dd { margin: 0.25rem 0 0; }
.dealership-link { display: block; border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1rem; }
.dealership-link h4 { color: #4f46e5; margin: 0 0 0.5rem; }
.contact-panel { background: #4f46e5; color: white; text-align: center; }
.brand-header { display: flex; gap: 1.5rem; align-items: flex-start; }
.brand-header-logo { height: 5rem; object-fit: contain; }
.brand-header .brand-facts { justify-content: flex-start; }
.dealership-banner { position: relative; height: 20rem; border-radius: 0.75rem; overflow: hidden; margin-bottom: 2rem; }
.dealership-banner h1 { position: absolute; bottom: 0; left: 0; margin: 0; padding: 2rem; color: white; font-size: 2.5rem; background: linear-gradient(transparent, rgba(0,0,0,0.5)); width: 100%; }
.dealership-banner--plain { height: auto; }
.dealership-banner--plain h1 { position: static; color: #111827; background: none; padding: 0; }
.dealership-info { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
.specialty-list { list-style: none; padding: 0; }
.brand-country { margin-left: 0.5rem; color: #6b7280; font-size: 0.875rem; }

@media (max-width: 768px) {
    .site-links { gap: 1rem; }
    .footer-grid, .car-overview { grid-template-columns: 1fr; }
    .car-summary, .brand-header { flex-direction: column; align-items: flex-start; }
    .hero h1 { font-size: 2.5rem; }
}
"#;
