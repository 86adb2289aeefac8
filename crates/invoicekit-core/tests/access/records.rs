use chrono::NaiveDate;
use invoicekit_core::*;

fn invoice_fields(client_id: &str, number: &str, status: InvoiceStatus, amount: f64) -> NewInvoice {
    NewInvoice {
        client_id: client_id.to_string(),
        invoice_number: number.to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
        status,
        items: vec![InvoiceItem::new("Consulting", 2.0, amount / 2.0)],
        tax_rate: 0.0,
        notes: String::new(),
        template_id: None,
    }
}

#[tokio::test]
async fn test_calls_without_session_require_auth() {
    let backend = InMemoryBackend::new();
    assert!(backend.current_user().await.unwrap().is_none());

    let err = backend.list_clients().await.unwrap_err();
    assert!(err.is_auth_required());
    let err = backend
        .create_client(NewClient::named("Acme"))
        .await
        .unwrap_err();
    assert!(err.is_auth_required());
}

#[tokio::test]
async fn test_client_crud() {
    let backend = InMemoryBackend::with_user(User::new("owner@example.com", "Owner"));

    let zed = backend.create_client(NewClient::named("Zed Ltd")).await.unwrap();
    let acme = backend.create_client(NewClient::named("acme")).await.unwrap();

    let names: Vec<String> = backend
        .list_clients()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["acme", "Zed Ltd"]);

    let mut fields = NewClient::named("Acme Corp");
    fields.email = "billing@acme.test".to_string();
    let updated = backend.update_client(&acme.id, fields).await.unwrap();
    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.email, "billing@acme.test");
    assert!(updated.updated_at >= updated.created_at);

    backend.delete_client(&zed.id).await.unwrap();
    assert_eq!(backend.list_clients().await.unwrap().len(), 1);
    assert!(backend.delete_client(&zed.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_records_of_other_users_are_not_found() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    let client = backend.create_client(NewClient::named("Acme")).await.unwrap();
    let invoice = backend
        .create_invoice(invoice_fields(&client.id, "INV-1", InvoiceStatus::Draft, 10.0))
        .await
        .unwrap();

    backend.sign_in(User::new("b@example.com", "B"));
    let err = backend.get_invoice(&invoice.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(backend.list_invoices().await.unwrap().is_empty());
    assert!(backend
        .delete_invoice(&invoice.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_invoice_references_must_resolve() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    let client = backend.create_client(NewClient::named("Acme")).await.unwrap();

    let err = backend
        .create_invoice(invoice_fields("no-such-client", "INV-1", InvoiceStatus::Draft, 10.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { entity: "client", ref id } if id == "no-such-client"));

    let mut fields = invoice_fields(&client.id, "INV-1", InvoiceStatus::Draft, 10.0);
    fields.template_id = Some("nonexistent-template".to_string());
    let err = backend.create_invoice(fields).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { entity: "template", .. }));
    assert!(backend.list_invoices().await.unwrap().is_empty());

    let mut fields = invoice_fields(&client.id, "INV-1", InvoiceStatus::Draft, 10.0);
    fields.template_id = Some("default-1".to_string());
    let invoice = backend.create_invoice(fields).await.unwrap();

    let err = backend
        .update_invoice(
            &invoice.id,
            invoice_fields("no-such-client", "INV-1", InvoiceStatus::Sent, 10.0),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    let stored = backend.get_invoice(&invoice.id).await.unwrap();
    assert_eq!(stored.client_id, client.id);
    assert_eq!(stored.status, InvoiceStatus::Draft);
}

#[tokio::test]
async fn test_clients_of_other_users_cannot_be_invoiced() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    let foreign = backend.create_client(NewClient::named("Acme")).await.unwrap();

    backend.sign_in(User::new("b@example.com", "B"));
    let err = backend
        .create_invoice(invoice_fields(&foreign.id, "INV-1", InvoiceStatus::Draft, 10.0))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_recent_invoices_newest_first() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    let client = backend.create_client(NewClient::named("Acme")).await.unwrap();
    for n in 1..=4 {
        backend
            .create_invoice(invoice_fields(
                &client.id,
                &format!("INV-{n}"),
                InvoiceStatus::Sent,
                10.0,
            ))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let recent = backend.recent_invoices(2).await.unwrap();
    let numbers: Vec<&str> = recent.iter().map(|i| i.invoice_number.as_str()).collect();
    assert_eq!(numbers, vec!["INV-4", "INV-3"]);
}

#[tokio::test]
async fn test_stats_fall_back_to_recomputation() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    let client = backend.create_client(NewClient::named("Acme")).await.unwrap();
    backend
        .create_invoice(invoice_fields(&client.id, "INV-1", InvoiceStatus::Paid, 100.0))
        .await
        .unwrap();
    backend
        .create_invoice(invoice_fields(&client.id, "INV-2", InvoiceStatus::Overdue, 40.0))
        .await
        .unwrap();

    let stats = backend.latest_stats().await.unwrap();
    assert_eq!(stats.total_revenue, 100.0);
    assert_eq!(stats.outstanding_amount, 40.0);
    assert_eq!(stats.total_clients, 1);

    let stored = backend.recompute_stats().await.unwrap();
    backend
        .create_invoice(invoice_fields(&client.id, "INV-3", InvoiceStatus::Paid, 5.0))
        .await
        .unwrap();

    // Stored record wins until the next recomputation.
    let latest = backend.latest_stats().await.unwrap();
    assert_eq!(latest.total_invoices, stored.total_invoices);
    assert_eq!(backend.recompute_stats().await.unwrap().total_invoices, 3);
}

#[tokio::test]
async fn test_injected_failure_is_one_shot() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    backend.fail_next("connection reset");

    let err = backend.list_clients().await.unwrap_err();
    assert!(err.is_storage_error());
    assert_eq!(err.to_string(), "Storage error: connection reset");
    assert!(backend.list_clients().await.is_ok());
}

#[tokio::test]
async fn test_sign_out_publishes_event() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    let mut events = backend.subscribe_auth();

    backend.sign_out().await.unwrap();
    assert_eq!(events.recv().await.unwrap(), AuthEvent::SignedOut);
    assert!(backend.current_user().await.unwrap().is_none());
}
