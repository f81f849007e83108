//! Demo-data seeder
//!
//! Destructive one-shot population of the store with the fixed sample
//! dataset: the VOICE project people, institutions, projects and methods.
//! Clears both tables first (links before nodes, they reference them),
//! inserts everything, commits once. Not reachable over HTTP; exposed only
//! as the `seed` CLI subcommand.

use uuid::Uuid;

use crate::link::LinkCreate;
use crate::node::NodeCreate;
use crate::storage::GraphStore;
use crate::Result;

/// Random short identifier for a seed link
fn generate_link_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Wipe the store and repopulate it with the fixed sample records.
///
/// Returns (node count, link count) inserted.
pub fn populate(store: &mut GraphStore) -> Result<(usize, usize)> {
    let nodes = seed_nodes();
    let links = seed_links();
    let counts = (nodes.len(), links.len());

    store.begin_transaction()?;

    let result: Result<()> = (|| {
        tracing::info!("Clearing existing data");
        store.clear_all()?;

        tracing::info!("Adding {} nodes", counts.0);
        for node in nodes {
            store.insert_node(node)?;
        }

        tracing::info!("Adding {} links", counts.1);
        for link in links {
            store.insert_link(link)?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            store.commit()?;
            Ok(counts)
        }
        Err(e) => {
            store.rollback()?;
            Err(e)
        }
    }
}

fn seed_nodes() -> Vec<NodeCreate> {
    vec![
        // People
        NodeCreate {
            bio: Some(
                "Jakob Kukula is a multidisciplinary creator, working in the fields of art, \
                 design and music. Born and raised in Berlin, he is life-long influenced by the \
                 city's thriving scenes. After finishing his product design studies at the \
                 Bauhaus University in Weimar, that included abroad experiences at the Pratt \
                 Institute, NY and working with Studio Drift in Amsterdam, he returned to Berlin \
                 where he worked two years with the Studio Olafur Eliasson and finished his MA \
                 Thesis at KHB Weißensee. As Founder of SpreeBerlin and Symbiotic lab, he \
                 currently explores a planet-centric practice; questioning the relationship \
                 between humans and nature, seeking ways to reconnect and suggesting ideas for \
                 transformation by combining art, design and science."
                    .to_string(),
            ),
            website: Some("https://www.spreeberlin.de/".to_string()),
            connections: Some("Waag (Lead Mentor)".to_string()),
            ..NodeCreate::new("P001", "Jakob Kukula", "People")
        },
        NodeCreate {
            bio: Some(
                "Marina Wainer is a Paris-based artist. For the last 20 years she has been \
                 making interactive art, at the nexus of creation, technology and society. Her \
                 work explores societal issues and spaces of representation, with a sensitive \
                 approach, imagining experiences where the audience is at the heart of the work. \
                 The interaction proposed in her projects, which encourages participation, has \
                 turned into collaboration, involving the public upstream and working with \
                 various communities. Throughout the years, Wainer has been developing \
                 transdisciplinary collaborations with artists, researchers and scientists."
                    .to_string(),
            ),
            website: Some("http://marinaestelawainer.com".to_string()),
            connections: Some("Waag (Lead Mentor)".to_string()),
            ..NodeCreate::new("P002", "Marina Wainer", "People")
        },
        NodeCreate {
            bio: Some(
                "Anna Dumitriu is an award winning internationally renowned British artist who \
                 works with BioArt, sculpture, installation, and digital media to explore our \
                 relationship to healthcare, climate-change and emerging technologies. Past \
                 exhibitions include ZKM, Ars Electronica, BOZAR, The Picasso Museum, HeK Basel, \
                 Nobel Prize Museum, MOCA Taipei, LABoral, Art Laboratory Berlin, and Eden \
                 Project. Anna's work has featured in significant publications including Frieze, \
                 Artforum International Magazine, Leonardo Journal, The Art Newspaper, Nature \
                 and The Lancet."
                    .to_string(),
            ),
            website: Some("https://annadumitriu.co.uk/".to_string()),
            connections: Some("INOVA (Lead Mentor)".to_string()),
            ..NodeCreate::new("P003", "Anna Dumitriu", "People")
        },
        NodeCreate {
            bio: Some(
                "Lucie's work explores the production and consumption of fashion and textile \
                 products and the role of craft to contribute more sustainable, responsible and \
                 durable practices. Lucie holds a background in human-computer interaction, \
                 designing tangible interfaces for embodied interaction. Her PhD investigated \
                 craft practice in the design of electronic textiles (E-Textiles) for embodied \
                 interaction. Lucie addressed sustainable practices for smart textiles in \
                 environmental and social contexts for WEAR Sustain, an EU Horizon 2020 \
                 Research and Development Programme."
                    .to_string(),
            ),
            website: Some("touchcraft.org.uk".to_string()),
            connections: Some("RCA (Lead Mentor)".to_string()),
            ..NodeCreate::new("P004", "Lucie Hernandez", "People")
        },
        NodeCreate {
            bio: Some(
                "Gayil Nalls, Ph.D. is an interdisciplinary artist, writer, and theorist. Nalls \
                 is best known for the world olfactory social sculpture World Sensorium, a \
                 statically based composition of phytogentic materials. World Sensorium, an \
                 ongoing work of scale and complexity, premiered in New York during the Times \
                 Square 2000 celebrations, released onto the crowd of two million participants. \
                 The work was featured in Washington D.C.'s Millennium Around the World gala, \
                 the Vatican's Millennium Jubilee in Rome, Italy, and was endorsed by UNESCO as \
                 a project of peace and goodwill."
                    .to_string(),
            ),
            website: Some("worldsensorium.com".to_string()),
            connections: Some("UCD (Lead Mentor)".to_string()),
            ..NodeCreate::new("P005", "Gayil Nalls", "People")
        },
        // Institutions
        NodeCreate {
            bio: Some(
                "Waag is a research institute for technology and society. We create \
                 technologies that have a positive impact on society. Through research and \
                 design, we develop new technologies and applications that contribute to more \
                 livable cities, fair algorithms, and technologies that help people."
                    .to_string(),
            ),
            website: Some("https://waag.org/".to_string()),
            ..NodeCreate::new("I001", "Waag Futurelab", "Institutions")
        },
        NodeCreate {
            bio: Some(
                "The Royal College of Art is a public research university in London, United \
                 Kingdom, specialising in art and design. It offers postgraduate degrees in art \
                 and design to students from over 60 countries. The RCA is consistently ranked \
                 as the world's leading university for art and design."
                    .to_string(),
            ),
            website: Some("https://www.rca.ac.uk/".to_string()),
            ..NodeCreate::new("I002", "Royal College of Art", "Institutions")
        },
        NodeCreate {
            bio: Some(
                "University College Dublin is a public research university in Dublin, Ireland, \
                 and a member institution of the National University of Ireland. It is \
                 Ireland's largest university with over 38,000 students, and is highly ranked \
                 internationally."
                    .to_string(),
            ),
            website: Some("https://www.ucd.ie/".to_string()),
            ..NodeCreate::new("I003", "University College Dublin", "Institutions")
        },
        NodeCreate {
            bio: Some(
                "NEoN Digital Arts (SCIO) advocates for digital art and technology while at \
                 the same time addressing the negatives aspects that can often arise from their \
                 use. We provide access to expertise and equipment in a safe, inclusive \
                 environment, using free, open-source or low cost software while simultaneously \
                 explaining the ethical issues surrounding their construction, use and disposal."
                    .to_string(),
            ),
            website: Some("https://neondigitalarts.com/".to_string()),
            ..NodeCreate::new("I004", "NEoN Digital Arts", "Institutions")
        },
        NodeCreate {
            bio: Some(
                "Access Space is an arts and education organisation, where people interested \
                 in art, design, computers, recycling, music, electronics, photography and \
                 more, meet like-minded people, share and develop skills. We engage with and \
                 encourage a very broad section of the community to get involved with artistic, \
                 creative and technical projects."
                    .to_string(),
            ),
            website: Some("https://access-space.org/".to_string()),
            ..NodeCreate::new("I005", "Access Space", "Institutions")
        },
        // Projects
        NodeCreate {
            description: Some(
                "Jakob Kukula's RiverSync is a transdisciplinary artistic intervention focused \
                 on river systems as ecological, legal, and cultural actors. Over the course of \
                 six months, RiverSync used participatory design, environmental sensing, and \
                 community storytelling to foster new relationships between urban residents, \
                 river systems, and legal frameworks. The project was centred on the Spree \
                 River in Berlin but extended to include international connections with water \
                 justice movements."
                    .to_string(),
            ),
            budget: Some("12,000 Euros".to_string()),
            methods: Some(
                "Participatory speculative workshops, River-centred meditation, Legal Moots \
                 and Rights of the Spree - Legal Co-design for Framework development, \
                 Participatory mapping, Storytelling and Platform work, Sensor Module Design, \
                 The Diplomatic Suitcase"
                    .to_string(),
            ),
            involved_institutions: Some(
                "Horizon Europe VOICE Project, European Union Grant Agreement No.101135803"
                    .to_string(),
            ),
            ..NodeCreate::new("PR001", "RiverSync", "Projects")
        },
        NodeCreate {
            description: Some(
                "Synocene is a collaborative work that explores a de-centred view of our \
                 anthropocentric experience of the natural world. Voices of local communities, \
                 the sounds of Natura 2000 forests, and the contributions of artificial \
                 intelligence all work to imagine a future beyond the Anthropocene. Artist \
                 Marina Wainer's Synocene took place in Ulvenhout Forest, a protected nature \
                 reserve in the Netherlands."
                    .to_string(),
            ),
            budget: Some("12,000 Euros".to_string()),
            methods: Some(
                "Nature walks (Reflective sound walks using binaural recordings), \
                 Participatory Speculative Design, Interactive / Conversational dialogues with \
                 AI-generated forest beings, Reflective / Co-created storytelling and \
                 co-created narratives, Multilingual interface, Sound recordings / sound data \
                 collection"
                    .to_string(),
            ),
            involved_institutions: Some(
                "Horizon Europe VOICE Project, European Union Grant Agreement No.101135803"
                    .to_string(),
            ),
            ..NodeCreate::new("PR002", "Synocene — beyond the Anthropocene", "Projects")
        },
        NodeCreate {
            description: Some(
                "Anna Dumitriu's project, Greening the Lab: Decarbonising Biomedical Science \
                 (GTL), is an art-led response to the ecological footprint of the biomedical \
                 sector. The artistic intervention responds to an urgent need from the \
                 biomedical research community to create novel solutions and increase \
                 stakeholder support via their patient and public engagement (PPE) communities \
                 for artist-led actions towards decarbonisation of biomedical science and \
                 healthcare settings."
                    .to_string(),
            ),
            budget: Some("12,000 Euros".to_string()),
            website: Some(
                "https://annadumitriu.co.uk/portfolio/greening-the-lab-decarbonising-biomedical-science/"
                    .to_string(),
            ),
            methods: Some(
                "Participatory art - hands-on art-making workshops, Storytelling and Open \
                 dialogue, Critical Making and Co-creative sessions, Experimental biomaterial \
                 processing, Open-source protocols, Strategic Dissemination at Symposiums and \
                 Public Events"
                    .to_string(),
            ),
            involved_institutions: Some(
                "Brighton and Sussex Medical School, University of Leeds, University of \
                 Oxford, Horizon Europe VOICE Project"
                    .to_string(),
            ),
            ..NodeCreate::new("PR003", "Greening the Lab: Decarbonising Biomedical Science", "Projects")
        },
        NodeCreate {
            description: Some(
                "An intimate performative VR experience that explores 'dis-ease' within the \
                 body through the experience of breast cancer. This interactive experience told \
                 the stories of patient healthcare struggles, particularly on the hidden \
                 experiences of breast cancer treatment. This artwork was presented through a \
                 combination of interactive VR art installation and creative methodologies, \
                 audiences experienced the stories of survivors, the treatments, and the often \
                 unspoken effects of the journey."
                    .to_string(),
            ),
            website: Some("https://mammary-vr.art/".to_string()),
            methods: Some(
                "Experience Design, VR Development, Community Storytelling, Haptic Feedback \
                 Design"
                    .to_string(),
            ),
            involved_institutions: Some(
                "NEoN Digital Arts, Access Space, Leitrim Sculpture Centre, Creative Heartlands"
                    .to_string(),
            ),
            ..NodeCreate::new("PR004", "Mammory Mountain", "Projects")
        },
        NodeCreate {
            description: Some(
                "World Sensorium Ireland is a sensory-based, interdisciplinary, art project \
                 led by Gayil Nalls that explores olfactory heritage as a critical component of \
                 environmental awareness, cultural identity, and community participation. \
                 Rooted in the landscape and plant life of Ireland, the project draws attention \
                 to endangered sensory experiences and fosters multi-generational engagement \
                 with the ecological and cultural transformations associated with the decline \
                 of turf (peat) usage."
                    .to_string(),
            ),
            budget: Some("12,000 Euros".to_string()),
            methods: Some(
                "Narrative Inquiry, Ethnographic Film Screening, Participatory Symposium, \
                 Sensory Immersion, QR-Coded Digital Polling, Dissemination Channels"
                    .to_string(),
            ),
            involved_institutions: Some("Horizon Europe VOICE Project".to_string()),
            website: Some(
                "https://worldsensorium.com/world-sensorium-ireland-project/".to_string(),
            ),
            ..NodeCreate::new("PR005", "World Sensorium: Ireland - Connecting Europe", "Projects")
        },
        // Methods
        NodeCreate {
            description: Some(
                "The Forest Walking Method is an immersive, participatory, sound-integrated \
                 and reflective artistic approach designed to explore human and more-than-human \
                 relationships through walking, listening, and conversational exchange. It \
                 centres on ecological awareness, immersive sound and characters, collaborative \
                 dialogue, and the imaginative use of AI to activate forest environments as \
                 playful, co-creative spaces for active ecological engagement and reflections."
                    .to_string(),
            ),
            category: Some("Environmental".to_string()),
            steps: Some(
                "1. Preparation and Scouting: Establish key locations and connections\n\
                 2. Stakeholder Mapping and Communication: Create zone maps to visualise relationships\n\
                 3. Sound Collection and AI Generation: Record ambient sounds and develop AI characters\n\
                 4. Forest Workshop: Conduct walking sessions with binaural recordings\n\
                 5. Debrief, Reflection and Documentation: Gather feedback and archive responses\n\
                 6. Post-Workshop Creation and Legacy: Create outputs and share with communities"
                    .to_string(),
            ),
            challenges: Some(
                "Ethical engagement and community consent; Technical adaptation to local \
                 conditions; Weather dependencies; Cultural sensitivity in AI character \
                 development"
                    .to_string(),
            ),
            links: Some("https://dl.acm.org/doi/abs/10.1145/3613905.3637118".to_string()),
            ..NodeCreate::new(
                "M001",
                "Forest Walking and Conversational Encounters Workshop Method",
                "Methods",
            )
        },
        NodeCreate {
            description: Some(
                "The Felting and Biomaterial Workshopping Method uses recycled lab and medical \
                 materials to create art-based workshops that invite participants into hands-on \
                 making, reflective discussion and playful exploration. It blends wet and dry \
                 felting, biomaterial crafting, and facilitated conversation to provoke new \
                 ways of seeing waste, contamination, care, and reuse in clinical and research \
                 settings."
                    .to_string(),
            ),
            category: Some("Material Arts".to_string()),
            challenges: Some(
                "Safety protocols for handling medical waste; Material sourcing and \
                 preparation; Contamination concerns; Participant comfort with medical \
                 materials; Ensuring proper sterilization processes"
                    .to_string(),
            ),
            conditions: Some(
                "Access to sterilized medical waste materials; Proper safety equipment and \
                 protocols; Workshop space with good ventilation; Experienced facilitators \
                 with knowledge of both art and medical safety"
                    .to_string(),
            ),
            ..NodeCreate::new(
                "M002",
                "Generative Felting and Biomaterial Workshopping Method",
                "Methods",
            )
        },
        NodeCreate {
            description: Some(
                "Reappropriated from the web and interaction design processes to create a \
                 participatory, performative and immersive practice, this method combines \
                 physical interaction, storytelling, haptics and emotional engagement. This \
                 method intersects digital art, performance, immersive storytelling, feminist \
                 healthcare activism, interaction design and VR technology."
                    .to_string(),
            ),
            category: Some("Digital Technology".to_string()),
            steps: Some(
                "1. Topic selection and funding: Start with story-driven concept\n\
                 2. Community outreach: Engage those with lived experience\n\
                 3. Consent and data gathering: Record stories with clear protocols\n\
                 4. Team assembly: Include technologists, designers, animators\n\
                 5. Interaction and experience design: Map audience journey\n\
                 6. Prototype and test: Especially wearable and haptic elements\n\
                 7. Build and deploy: Design immersive environment\n\
                 8. Exhibition and caretaking: Manage emotional responses"
                    .to_string(),
            ),
            challenges: Some(
                "Technical failure during performances; Emotional triggering of sensitive \
                 content; Community access barriers; Data ethics and consent management; \
                 Balancing technology with human experience"
                    .to_string(),
            ),
            ..NodeCreate::new("M003", "Experience Design", "Methods")
        },
        NodeCreate {
            description: Some(
                "Inclusive Design is a philosophy, movement and methodology that aims to \
                 centre those traditionally excluded from design and cultural processes. It is \
                 an approach used by designers, artists, community workers, researchers, \
                 educators, and practitioners who want to engage with diverse perspectives to \
                 produce artworks or outcomes that are usable, respectful and co-owned by the \
                 people they aim to serve."
                    .to_string(),
            ),
            category: Some("Inclusive Design".to_string()),
            challenges: Some(
                "Avoiding tokenism and superficial inclusion; Managing power dynamics in \
                 collaborative processes; Ensuring authentic participation rather than \
                 consultation; Resource constraints and funding limitations; Balancing \
                 different community needs and perspectives; Maintaining long-term \
                 relationships beyond project timelines"
                    .to_string(),
            ),
            conditions: Some(
                "Commitment to genuine power sharing; Flexible timelines that accommodate \
                 community schedules; Accessible meeting spaces and formats; Budget for \
                 participant compensation; Cultural competency training for team members; \
                 Clear agreements about authorship and ownership"
                    .to_string(),
            ),
            ..NodeCreate::new("M004", "Inclusive Design", "Methods")
        },
    ]
}

fn seed_links() -> Vec<LinkCreate> {
    let link = |source: &str, target: &str, relationship_type: &str, strength: f64| {
        LinkCreate::new(generate_link_id(), source, target, relationship_type)
            .with_strength(strength)
    };

    vec![
        // People to Projects - leadership
        link("P001", "PR001", "leads", 1.0),
        link("P002", "PR002", "leads", 1.0),
        link("P003", "PR003", "leads", 1.0),
        link("P005", "PR005", "leads", 1.0),
        // Projects to Methods - application
        link("PR002", "M001", "applies", 0.9),
        link("PR003", "M002", "applies", 0.9),
        link("PR004", "M003", "applies", 1.0),
        // People to Methods - development
        link("P002", "M001", "develops", 0.8),
        link("P003", "M002", "develops", 0.8),
        link("P004", "M004", "uses", 0.6),
        // People to Institutions - affiliation
        link("P001", "I001", "mentored_by", 0.7),
        link("P002", "I001", "mentored_by", 0.7),
        link("P004", "I002", "mentored_by", 0.7),
        link("P005", "I003", "mentored_by", 0.7),
        // Institutions to Projects - support
        link("I004", "PR004", "supports", 0.7),
        link("I005", "PR004", "supports", 0.7),
        link("I001", "PR001", "supports", 0.8),
        link("I001", "PR002", "supports", 0.8),
        link("I002", "PR004", "supports", 0.8),
        link("I003", "PR005", "supports", 0.8),
    ]
}
