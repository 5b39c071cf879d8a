//! Static landing page.

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Stripe Payment API</title>
    <style>
      body { font-family: system-ui, sans-serif; background: #f9fafb; margin: 0; padding: 2rem; }
      main { max-width: 42rem; margin: 0 auto; background: #fff; border-radius: .5rem; padding: 2rem; box-shadow: 0 10px 25px rgba(0,0,0,.08); }
      h1 { margin-top: 0; }
      pre, code { background: #1f2937; color: #4ade80; border-radius: .375rem; }
      pre { padding: .75rem; overflow-x: auto; }
      code { padding: .1rem .3rem; }
      section { background: #f3f4f6; border-radius: .5rem; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
      .note { color: #6b7280; font-size: .875rem; }
    </style>
  </head>
  <body>
    <main>
      <h1>Stripe Payment API</h1>
      <p>Endpoints para crear sesiones de checkout con Stripe.</p>

      <section>
        <h2>JSON</h2>
        <pre>POST /api/create-checkout-session
Content-Type: application/json

{
  "productId": "prod_xxxxx",
  "quantity": 1
}</pre>
        <p>Respuesta <code>200</code>: <code>{"url": "https://checkout.stripe.com/..."}</code></p>
        <p>Error <code>400</code> / <code>500</code> / <code>504</code>: <code>{"error": "..."}</code></p>
        <p class="note">Opcional: <code>successUrl</code>, <code>cancelUrl</code>, <code>attendeeNames</code>. Admite CORS y <code>OPTIONS</code>.</p>
      </section>

      <section>
        <h2>Formulario (iframe)</h2>
        <pre>POST /api/create-checkout-session-form
Content-Type: multipart/form-data

productId=prod_xxxxx
quantity=2
attendeeName0=Ana
attendeeName1=Luis
successUrl=https://... (opcional)
cancelUrl=https://... (opcional)</pre>
        <p>Siempre responde <code>200</code> con una página HTML que envía al contenedor:</p>
        <pre>window.parent.postMessage({ type: 'stripe-checkout-success', url }, '*')
window.parent.postMessage({ type: 'stripe-checkout-error', error }, '*')</pre>
      </section>

      <p class="note">Respuesta: URL de checkout de Stripe.</p>
    </main>
  </body>
</html>
"#;

/// Informational page describing the available endpoints.
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
