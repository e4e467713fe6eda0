//! Plain-text assembly of the eviction notice.
//!
//! The letter layout is fixed: sender block, tenant block, subject, seven
//! clauses and a closing. Field values are dropped into their slots as-is.

use super::model::NoticeRequest;

/// The blank letter with `[...]` placeholders, as shown to the generation
/// model.
pub const CANONICAL_TEMPLATE: &str = "[Your Name]

[Your Address]

[City, State, ZIP Code]

[Email Address]

[Phone Number]

[Date]

[Tenant]

[Tenant’s Name]

[Tenant’s Address]

[City, State, ZIP Code]

Subject: Eviction Notice

Dear [Tenant’s Name],

I hope this letter finds you well. I am writing to officially notify you that your tenancy at [Tenant’s Address] is terminated by the terms of our lease agreement dated [Date of Lease Agreement].

The grounds for eviction are [Specify grounds, e.g., non-payment of rent, breach of terms, etc.]. As per Section X of the Rent Control Act [mention relevant Act], these grounds warrant termination of the tenancy.

Notice Period: You are hereby given [X] days’ notice to vacate the premises, as required by Section Y of the Rent Control Act. The notice period starts from the date of receipt of this letter.

Rent Arrears: Please be advised that the outstanding rent amount of [Specify amount] for the period [Specify period] is due and must be settled before the end of the notice period to avoid further legal action.

Property Inspection: Prior to vacating the premises, a joint inspection of the property will be conducted on [Specify Date and Time] to assess any damages. Your presence is requested during this inspection.

Return of Keys: Kindly return all keys, access cards, or any other property belonging to the premises on or before the date of vacating.

Failure to Comply: Failure to vacate the premises within the stipulated notice period will result in legal action, including but not limited to court proceedings for eviction.

Should you have any concerns or queries regarding this notice, please feel free to contact me at [Your Phone Number] or [Your Email Address].

Thank you for your understanding and cooperation in this matter.

Sincerely,

[Your Full Name]

[Your Signature]
";

/// Fill the canonical letter with the request's values.
///
/// Total and deterministic: empty fields produce empty slots, nothing is
/// validated here.
pub fn assemble(request: &NoticeRequest) -> String {
    format!(
        "[Your Name]
{your_name}

[Your Address]
{your_address}

[City, State, ZIP Code]
{city_state_zip}

[Email Address]
{email}

[Phone Number]
{phone}

[Date]
{date}

[Tenant]
[Tenant’s Name]
{tenant_name}

[Tenant’s Address]
{tenant_address}

[City, State, ZIP Code]
{tenant_city_state_zip}

Subject: Eviction Notice

Dear {tenant_name},

I hope this letter finds you well. I am writing to officially notify you that your tenancy at {tenant_address} is terminated by the terms of our lease agreement dated {date_of_lease}.

The grounds for eviction are {grounds_for_eviction}. As per Section X of the Rent Control Act [mention relevant Act], these grounds warrant termination of the tenancy.

Notice Period: You are hereby given {notice_period} days’ notice to vacate the premises, as required by Section Y of the Rent Control Act. The notice period starts from the date of receipt of this letter.

Rent Arrears: Please be advised that the outstanding rent amount of {outstanding_rent} for the period {rent_period} is due and must be settled before the end of the notice period to avoid further legal action.

Property Inspection: Prior to vacating the premises, a joint inspection of the property will be conducted on {inspection_date_time} to assess any damages. Your presence is requested during this inspection.

Return of Keys: Kindly return all keys, access cards, or any other property belonging to the premises on or before {return_keys_date}.

Failure to Comply: Failure to vacate the premises within the stipulated notice period will result in legal action, including but not limited to court proceedings for eviction.

Should you have any concerns or queries regarding this notice, please feel free to contact me at {phone} or {email}.

Thank you for your understanding and cooperation in this matter.

Sincerely,

{your_full_name}

{your_signature}
",
        your_name = request.your_name,
        your_address = request.your_address,
        city_state_zip = request.city_state_zip,
        email = request.email,
        phone = request.phone,
        date = request.date,
        tenant_name = request.tenant_name,
        tenant_address = request.tenant_address,
        tenant_city_state_zip = request.tenant_city_state_zip,
        date_of_lease = request.date_of_lease,
        grounds_for_eviction = request.grounds_for_eviction,
        notice_period = request.notice_period,
        outstanding_rent = request.outstanding_rent,
        rent_period = request.rent_period,
        inspection_date_time = request.inspection_date_time,
        return_keys_date = request.return_keys_date,
        your_full_name = request.your_full_name,
        your_signature = request.your_signature,
    )
}
