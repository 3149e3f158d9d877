//! Signature-gated fee payment recording.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use seatledger_core::error::AppError;
use seatledger_core::model::{Booking, BookingPatch, BookingStatus, PaymentDetail};
use seatledger_core::result::AppResult;

use seatledger_database::PartitionRegistry;

use super::signature::SignatureVerifier;

/// A gateway-confirmed fee payment as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct FeePayment {
    /// Gateway order id.
    pub order_id: String,
    /// Gateway payment id.
    pub payment_id: String,
    /// Hex HMAC signature over `order_id|payment_id`.
    pub signature: String,
    /// Member registration the payment applies to.
    pub registration: String,
    /// Fee form fields applied to the booking row.
    #[serde(default)]
    pub form: BookingPatch,
}

/// Commits fee payments after the gateway signature checks out.
#[derive(Clone)]
pub struct FeePaymentService {
    verifier: SignatureVerifier,
    partitions: Arc<PartitionRegistry>,
}

impl FeePaymentService {
    /// Create a new fee payment service.
    pub fn new(verifier: SignatureVerifier, partitions: Arc<PartitionRegistry>) -> Self {
        Self {
            verifier,
            partitions,
        }
    }

    /// Verify the payment signature and record the fee.
    ///
    /// The signature check gates every write: on mismatch the call fails
    /// with `InvalidSignature` and performs no writes to either the
    /// partition or the ledger. On success the booking is upserted with
    /// the fee fields, status `Paid`, the gateway reference, and today's
    /// date; the member ledger follows asynchronously via projection.
    pub async fn verify_and_record(&self, payment: FeePayment) -> AppResult<Booking> {
        if !self
            .verifier
            .verify(&payment.order_id, &payment.payment_id, &payment.signature)
        {
            warn!(
                registration = %payment.registration,
                order_id = %payment.order_id,
                "Rejected fee payment with invalid signature"
            );
            return Err(AppError::invalid_signature(
                "Payment signature verification failed",
            ));
        }

        let mut patch = payment.form;
        patch.status = Some(BookingStatus::Paid);
        patch.date = None; // stamped with today by the upsert
        patch.payment_detail = Some(PaymentDetail {
            order_id: payment.order_id.clone(),
            payment_id: payment.payment_id.clone(),
        });

        let outcome = self
            .partitions
            .current()
            .upsert_by_registration(&payment.registration, patch)
            .await?;

        info!(
            registration = %payment.registration,
            order_id = %payment.order_id,
            created = outcome.created,
            "Fee payment recorded"
        );
        Ok(outcome.booking)
    }
}
